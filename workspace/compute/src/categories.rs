//! Category tree read model.

use std::collections::HashSet;

use model::entities::category;

/// A top-level category with its direct children attached.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub category: category::Model,
    pub children: Vec<category::Model>,
}

/// Partitions a flat category list into top-level nodes, each carrying its
/// direct children. Input order is preserved at both levels. A child whose
/// parent is absent from the input is promoted to top level rather than
/// dropped.
///
/// Nothing here defends against a category being its own ancestor; the
/// store does not produce such data and the behavior for it is undefined.
pub fn category_tree(categories: Vec<category::Model>) -> Vec<CategoryNode> {
    let top_ids: HashSet<i32> = categories
        .iter()
        .filter(|c| c.parent_id.is_none())
        .map(|c| c.id)
        .collect();

    let mut nodes: Vec<CategoryNode> = Vec::new();
    let mut children: Vec<category::Model> = Vec::new();

    for category in categories {
        match category.parent_id {
            Some(parent_id) if top_ids.contains(&parent_id) => children.push(category),
            _ => nodes.push(CategoryNode {
                category,
                children: Vec::new(),
            }),
        }
    }

    for child in children {
        // The parent is known to be present; the filter above guarantees it.
        if let Some(node) = nodes
            .iter_mut()
            .find(|n| Some(n.category.id) == child.parent_id)
        {
            node.children.push(child);
        }
    }

    nodes
}
