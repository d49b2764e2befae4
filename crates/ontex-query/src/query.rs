//! Query parsing

use std::fmt;

/// Direction of a numeric comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Strictly less than the operand
    Below,
    /// Strictly greater than the operand
    Above,
}

impl Comparison {
    /// Apply the comparison to `value` against `limit`
    pub fn holds<T: PartialOrd>(self, value: T, limit: T) -> bool {
        match self {
            Self::Below => value < limit,
            Self::Above => value > limit,
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Below => '<',
            Self::Above => '>',
        }
    }
}

/// A parsed query
///
/// Keyword operands are lower-case and trimmed.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// The empty query; matches nothing
    Empty,
    /// `dish:<kw>`
    Dish(String),
    /// `chef:<kw>`
    Chef(String),
    /// `price:<N` or `price:>N`
    Price(Comparison, f64),
    /// `rating:>N`
    Rating(f64),
    /// `vegan`
    Vegan,
    /// `confirmed`
    Confirmed,
    /// `pending`
    Pending,
    /// `seasonal`
    Seasonal,
    /// `vip`
    Vip,
    /// `party:>N`
    Party(i64),
    /// `visits:>N`
    Visits(i64),
    /// `award:<kw>`; an empty keyword matches every award
    Award(String),
    /// `ingredient:<kw>`
    Ingredient(String),
    /// Free-text substring search
    Text(String),
    /// A recognised operator whose operand did not parse; matches nothing
    Malformed(String),
}

impl Query {
    /// Parse a query string
    ///
    /// Never fails: unknown prefixes are free text and bad numeric operands
    /// become [`Query::Malformed`].
    pub fn parse(input: &str) -> Self {
        let q = input.trim().to_lowercase();
        if q.is_empty() {
            return Self::Empty;
        }

        if let Some(kw) = q.strip_prefix("dish:") {
            return Self::Dish(kw.trim().to_string());
        }
        if let Some(kw) = q.strip_prefix("chef:") {
            return Self::Chef(kw.trim().to_string());
        }
        if let Some(n) = q.strip_prefix("price:<") {
            return float_operand(&q, n, |limit| Self::Price(Comparison::Below, limit));
        }
        if let Some(n) = q.strip_prefix("price:>") {
            return float_operand(&q, n, |limit| Self::Price(Comparison::Above, limit));
        }
        if let Some(n) = q.strip_prefix("rating:>") {
            return float_operand(&q, n, Self::Rating);
        }
        if let Some(n) = q.strip_prefix("party:>") {
            return int_operand(&q, n, Self::Party);
        }
        if let Some(n) = q.strip_prefix("visits:>") {
            return int_operand(&q, n, Self::Visits);
        }
        if let Some(kw) = q.strip_prefix("award:") {
            return Self::Award(kw.trim().to_string());
        }
        if let Some(kw) = q.strip_prefix("ingredient:") {
            return Self::Ingredient(kw.trim().to_string());
        }

        match q.as_str() {
            "vegan" => Self::Vegan,
            "confirmed" => Self::Confirmed,
            "pending" => Self::Pending,
            "seasonal" => Self::Seasonal,
            "vip" => Self::Vip,
            _ => Self::Text(q),
        }
    }

    /// Short name of the comparison kind, for logs and listings
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Dish(_) => "dish",
            Self::Chef(_) => "chef",
            Self::Price(..) => "price",
            Self::Rating(_) => "rating",
            Self::Vegan => "vegan",
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Seasonal => "seasonal",
            Self::Vip => "vip",
            Self::Party(_) => "party",
            Self::Visits(_) => "visits",
            Self::Award(_) => "award",
            Self::Ingredient(_) => "ingredient",
            Self::Text(_) => "text",
            Self::Malformed(_) => "malformed",
        }
    }
}

fn float_operand(q: &str, operand: &str, build: impl FnOnce(f64) -> Query) -> Query {
    operand
        .trim()
        .parse::<f64>()
        .map(build)
        .unwrap_or_else(|_| Query::Malformed(q.to_string()))
}

fn int_operand(q: &str, operand: &str, build: impl FnOnce(i64) -> Query) -> Query {
    operand
        .trim()
        .parse::<i64>()
        .map(build)
        .unwrap_or_else(|_| Query::Malformed(q.to_string()))
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Dish(kw) => write!(f, "dish:{}", kw),
            Self::Chef(kw) => write!(f, "chef:{}", kw),
            Self::Price(cmp, limit) => write!(f, "price:{}{}", cmp.symbol(), limit),
            Self::Rating(limit) => write!(f, "rating:>{}", limit),
            Self::Vegan => f.write_str("vegan"),
            Self::Confirmed => f.write_str("confirmed"),
            Self::Pending => f.write_str("pending"),
            Self::Seasonal => f.write_str("seasonal"),
            Self::Vip => f.write_str("vip"),
            Self::Party(limit) => write!(f, "party:>{}", limit),
            Self::Visits(limit) => write!(f, "visits:>{}", limit),
            Self::Award(kw) => write!(f, "award:{}", kw),
            Self::Ingredient(kw) => write!(f, "ingredient:{}", kw),
            Self::Text(text) | Self::Malformed(text) => f.write_str(text),
        }
    }
}
