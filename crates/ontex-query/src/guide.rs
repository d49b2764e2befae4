//! Example queries with short descriptions

/// One entry of the query guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    /// Query text to type
    pub query: &'static str,
    /// What it finds
    pub description: &'static str,
}

/// The query guide, one example per operator
pub const EXAMPLES: &[Example] = &[
    Example { query: "dish:truffle", description: "Dishes mentioning truffle" },
    Example { query: "chef:karim", description: "Dishes prepared by a chef named Karim" },
    Example { query: "price:<30", description: "Anything priced under $30" },
    Example { query: "price:>50", description: "Anything priced over $50" },
    Example { query: "rating:>4.7", description: "Anything rated above 4.7" },
    Example { query: "vegan", description: "Vegan dishes" },
    Example { query: "confirmed", description: "Confirmed reservations" },
    Example { query: "pending", description: "Reservations awaiting confirmation" },
    Example { query: "party:>4", description: "Reservations for more than 4 guests" },
    Example { query: "seasonal", description: "Seasonal ingredients" },
    Example { query: "award:michelin", description: "Awards mentioning Michelin" },
    Example { query: "vip", description: "VIP customers" },
    Example { query: "visits:>20", description: "Guests with more than 20 visits" },
    Example { query: "<any text>", description: "Free-text search across every value" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Query;

    #[test]
    fn test_every_operator_example_parses_to_its_operator() {
        for example in EXAMPLES.iter().filter(|e| !e.query.starts_with('<')) {
            let query = Query::parse(example.query);
            assert!(
                !matches!(query, Query::Text(_) | Query::Malformed(_) | Query::Empty),
                "{} parsed as {:?}",
                example.query,
                query
            );
            assert_eq!(query.to_string(), example.query);
        }
    }
}
