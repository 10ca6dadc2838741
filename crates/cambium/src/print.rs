//! Debug printer.

use crate::access::TreeAccess;
use crate::types::Side;

/// Render the tree to a string, one node per line with its balance tag;
/// `label` formats the caller's payload for a handle.
pub fn print_tree<T, F>(tree: &T, label: F) -> String
where
    T: TreeAccess,
    F: Fn(T::Ref) -> String,
{
    match tree.root() {
        Some(root) => print_node(tree, Some(root), "", &label),
        None => "∅".to_string(),
    }
}

fn print_node<T, F>(tree: &T, node: Option<T::Ref>, tab: &str, label: &F) -> String
where
    T: TreeAccess,
    F: Fn(T::Ref) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(node) => {
            let deeper = format!("{tab}  ");
            let left = print_node(tree, tree.child(node, Side::Left), &deeper, label);
            let right = print_node(tree, tree.child(node, Side::Right), &deeper, label);
            format!(
                "{} [{:?}]\n{tab}L={left}\n{tab}R={right}",
                label(node),
                tree.balance(node),
            )
        }
    }
}
