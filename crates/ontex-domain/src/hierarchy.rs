//! Hierarchy Index - parent→children edges derived from `subClassOf`
//!
//! The class graph may have several parents per class, so a class can show up
//! under more than one branch. Source data is not checked for cycles. Within
//! one traversal a class is expanded at most once: a later parent lists it
//! without repeating its subtree, and a class already on the current path is
//! not listed again. The walk is linear in the number of edges.

use std::collections::{HashMap, HashSet};

use crate::OntologyClass;

/// One line of a printable class tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Class local name
    pub name: String,

    /// Distance from the root the walk started at (roots are 0)
    pub depth: usize,
}

/// Reverse subclass edges: parent name → child names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HierarchyIndex {
    children: HashMap<String, Vec<String>>,
    roots: Vec<String>,
}

impl HierarchyIndex {
    /// Derive the index from a class table
    ///
    /// Every parent entry of every class contributes one child edge, so a
    /// class with two parents is recorded under both.
    pub fn from_classes<'a, I>(classes: I) -> Self
    where
        I: IntoIterator<Item = &'a OntologyClass>,
    {
        let mut index = Self::default();
        for class in classes {
            if class.is_root() {
                index.roots.push(class.name.clone());
            }
            for parent in &class.parents {
                index
                    .children
                    .entry(parent.clone())
                    .or_default()
                    .push(class.name.clone());
            }
        }
        index
    }

    /// Children recorded under `parent`, in document order
    pub fn children_of(&self, parent: &str) -> &[String] {
        self.children.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Classes with no declared parent, in document order
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Pre-order walk of the subtree under `root`
    ///
    /// Children are visited in ascending name order. A class reached again
    /// through a second parent is listed as a leaf; a class already on the
    /// path from `root` is skipped.
    pub fn walk_from(&self, root: &str) -> Vec<TreeNode> {
        let mut walk = Walk::default();
        self.visit(root, 0, &mut walk);
        walk.out
    }

    /// Pre-order walk of every root, roots in ascending name order
    pub fn walk(&self) -> Vec<TreeNode> {
        let mut roots: Vec<&String> = self.roots.iter().collect();
        roots.sort();
        roots.into_iter().flat_map(|r| self.walk_from(r)).collect()
    }

    fn visit<'a>(&'a self, name: &'a str, depth: usize, walk: &mut Walk<'a>) {
        if walk.path.contains(name) {
            return;
        }
        walk.out.push(TreeNode {
            name: name.to_string(),
            depth,
        });
        if !walk.expanded.insert(name) {
            return;
        }

        walk.path.insert(name);
        let mut children: Vec<&String> = self.children_of(name).iter().collect();
        children.sort();
        for child in children {
            self.visit(child, depth + 1, walk);
        }
        walk.path.remove(name);
    }
}

/// State of one `walk_from` call
#[derive(Default)]
struct Walk<'a> {
    out: Vec<TreeNode>,
    /// Classes from the root down to the one being visited
    path: HashSet<&'a str>,
    /// Classes whose children have been listed
    expanded: HashSet<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str, parents: &[&str]) -> OntologyClass {
        parents
            .iter()
            .fold(OntologyClass::new(name, format!("u#{}", name)), |c, p| c.with_parent(*p))
    }

    fn names(nodes: &[TreeNode]) -> Vec<(&str, usize)> {
        nodes.iter().map(|n| (n.name.as_str(), n.depth)).collect()
    }

    #[test]
    fn test_single_parent_tree() {
        let classes = vec![
            class("Person", &[]),
            class("Chef", &["Person"]),
            class("HeadChef", &["Chef"]),
            class("Customer", &["Person"]),
        ];
        let index = HierarchyIndex::from_classes(&classes);

        assert_eq!(index.roots(), &["Person".to_string()]);
        assert_eq!(
            names(&index.walk()),
            vec![("Person", 0), ("Chef", 1), ("HeadChef", 2), ("Customer", 1)]
        );
    }

    #[test]
    fn test_multi_parent_class_appears_under_both_parents() {
        let classes = vec![
            class("Dish", &[]),
            class("Seasonal", &[]),
            class("SeasonalDessert", &["Dish", "Seasonal"]),
        ];
        let index = HierarchyIndex::from_classes(&classes);

        assert_eq!(index.children_of("Dish"), &["SeasonalDessert".to_string()]);
        assert_eq!(index.children_of("Seasonal"), &["SeasonalDessert".to_string()]);
        assert_eq!(
            names(&index.walk()),
            vec![("Dish", 0), ("SeasonalDessert", 1), ("Seasonal", 0), ("SeasonalDessert", 1)]
        );
    }

    #[test]
    fn test_cycle_reachable_from_root_is_bounded() {
        // Root → A → B → A
        let classes = vec![
            class("Root", &[]),
            class("A", &["Root", "B"]),
            class("B", &["A"]),
        ];
        let index = HierarchyIndex::from_classes(&classes);
        let walked = index.walk_from("Root");

        assert_eq!(names(&walked), vec![("Root", 0), ("A", 1), ("B", 2)]);
        assert_eq!(walked.iter().filter(|n| n.name == "A").count(), 1);
    }

    #[test]
    fn test_self_loop_is_bounded() {
        let classes = vec![class("Root", &[]), class("Loop", &["Root", "Loop"])];
        let index = HierarchyIndex::from_classes(&classes);
        assert_eq!(names(&index.walk()), vec![("Root", 0), ("Loop", 1)]);
    }

    #[test]
    fn test_unknown_class_has_no_children() {
        let index = HierarchyIndex::from_classes(&Vec::<OntologyClass>::new());
        assert!(index.children_of("Nothing").is_empty());
        assert!(index.walk().is_empty());
    }

    #[test]
    fn test_cycle_reached_through_two_parents() {
        // Root → {A, B}, A → C, B → C, C → A
        let classes = vec![
            class("Root", &[]),
            class("A", &["Root", "C"]),
            class("B", &["Root"]),
            class("C", &["A", "B"]),
        ];
        let index = HierarchyIndex::from_classes(&classes);
        let walked = index.walk_from("Root");

        assert_eq!(
            names(&walked),
            vec![("Root", 0), ("A", 1), ("C", 2), ("B", 1), ("C", 2)]
        );
        assert_eq!(walked.iter().filter(|n| n.name == "A").count(), 1);
    }

    #[test]
    fn test_shared_subtree_is_expanded_once() {
        // Root → {L, R} → M → leaf, seen under both L and R
        let classes = vec![
            class("Root", &[]),
            class("L", &["Root"]),
            class("R", &["Root"]),
            class("M", &["L", "R"]),
            class("Leaf", &["M"]),
        ];
        let index = HierarchyIndex::from_classes(&classes);

        assert_eq!(
            names(&index.walk()),
            vec![("Root", 0), ("L", 1), ("M", 2), ("Leaf", 3), ("R", 1), ("M", 2)]
        );
    }

    #[test]
    fn test_diamond_chain_stays_linear() {
        // Twenty stacked diamonds: top → {l, r} → bottom, bottom is the next top
        let mut classes = vec![class("D0", &[])];
        for i in 0..20 {
            let top = format!("D{}", i);
            let bottom = format!("D{}", i + 1);
            let left = format!("L{}", i);
            let right = format!("R{}", i);
            classes.push(class(&left, &[top.as_str()]));
            classes.push(class(&right, &[top.as_str()]));
            classes.push(class(&bottom, &[left.as_str(), right.as_str()]));
        }
        let index = HierarchyIndex::from_classes(&classes);
        let walked = index.walk();

        // Every class once, plus each bottom listed again under its right parent
        assert_eq!(classes.len(), 61);
        assert_eq!(walked.len(), 61 + 20);
        let mut distinct: Vec<&str> = walked.iter().map(|n| n.name.as_str()).collect();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 61);
    }
}
