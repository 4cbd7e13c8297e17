//! Renders a tree depth first, pre-order, left child before right child.
//!
//! ```text
//! (0)  <root digest>
//! (1)   <interior digest>
//! (2)    <leaf digest> (data: a)
//! (2)    <leaf digest> (data: b)
//! ```
//!
//! Every interior node gets one line at its depth (root is 0), every leaf
//! child gets one line at its parent's depth + 1 with the original data
//! next to it. Padding children get no line.

use std::io;

use log::trace;

use crate::node::{InternalNode, Node};

/// Renders every line of the tree rooted at `root`.
pub fn render(root: &InternalNode) -> Vec<String> {
    let mut lines = Vec::new();
    render_node(root, 0, &mut lines);
    lines
}

/// Writes the rendered tree to `out`, one line each.
pub fn write_tree<W: io::Write>(root: &InternalNode, out: &mut W) -> io::Result<()> {
    for line in render(root) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render_node(node: &InternalNode, depth: usize, lines: &mut Vec<String>) {
    trace!("rendering node {} at depth {}", node.digest(), depth);
    lines.push(format!("({}) {} {}", depth, indent(depth), node.digest()));

    for child in [node.left(), node.right()] {
        match child {
            Node::Internal(inner) => render_node(inner, depth + 1, lines),
            Node::Leaf(leaf) => lines.push(format!(
                "({}) {} {} (data: {})",
                depth + 1,
                indent(depth + 1),
                leaf.digest(),
                leaf.data_lossy()
            )),
            Node::Padding => {}
        }
    }
}

fn indent(depth: usize) -> String {
    " ".repeat(depth)
}
