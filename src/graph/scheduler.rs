// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deterministic scheduling over an [`Adjacency`].
//!
//! ## Execution order
//! Kahn's algorithm where the ready set is a min-heap keyed by declaration
//! index, so among nodes whose dependencies are all satisfied the one declared
//! first always runs first. The order is a pure function of the document.
//!
//! ## Cycle search
//! Depth-first traversal driven by an explicit stack (no recursion) with
//! three colours:
//! - **White**: not yet reached
//! - **Grey**: on the current traversal path
//! - **Black**: fully explored
//!
//! Reaching a grey node closes a cycle; the path from that node to the top of
//! the stack is the cycle. Roots and neighbours are visited in declaration
//! order, so the reported cycle is stable across runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::Adjacency;

/// Topological order of all nodes, ties broken by declaration index.
///
/// On a cycle, returns the nodes that could never be scheduled.
pub(crate) fn topological_order(adjacency: &Adjacency) -> Result<Vec<usize>, Vec<usize>> {
    let node_count = adjacency.len();
    let mut in_degree: Vec<usize> = adjacency.dependencies.iter().map(Vec::len).collect();

    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(node, _)| Reverse(node))
        .collect();

    let mut order = Vec::with_capacity(node_count);
    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for &dependent in &adjacency.dependents[node] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }

    if order.len() == node_count {
        Ok(order)
    } else {
        Err((0..node_count).filter(|&node| in_degree[node] > 0).collect())
    }
}

/// Groups an execution order into levels: level 0 holds nodes without
/// dependencies, level N nodes whose deepest dependency sits in level N-1.
/// Nodes within a level keep declaration order.
pub(crate) fn levels(adjacency: &Adjacency, order: &[usize]) -> Vec<Vec<usize>> {
    let mut level_of = vec![0usize; adjacency.len()];
    for &node in order {
        level_of[node] = adjacency.dependencies[node]
            .iter()
            .map(|&dep| level_of[dep] + 1)
            .max()
            .unwrap_or(0);
    }

    let depth = level_of.iter().max().map_or(0, |deepest| deepest + 1);
    let mut levels = vec![Vec::new(); depth];
    for (node, &level) in level_of.iter().enumerate() {
        levels[level].push(node);
    }
    levels
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Grey,
    Black,
}

/// Finds one cycle, in data-flow direction, with its first node repeated at
/// the end (`[a, b, a]`). A self-reference yields `[a, a]`.
pub(crate) fn find_cycle(adjacency: &Adjacency) -> Option<Vec<usize>> {
    let mut color = vec![Color::White; adjacency.len()];
    // (node, index of the next dependent to visit)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..adjacency.len() {
        if color[root] != Color::White {
            continue;
        }
        color[root] = Color::Grey;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            match adjacency.dependents[node].get(frame.1).copied() {
                Some(next) => {
                    frame.1 += 1;
                    match color[next] {
                        Color::White => {
                            color[next] = Color::Grey;
                            stack.push((next, 0));
                        }
                        Color::Grey => {
                            let start = stack.iter().position(|&(n, _)| n == next).unwrap_or(0);
                            let mut cycle: Vec<usize> =
                                stack[start..].iter().map(|&(n, _)| n).collect();
                            cycle.push(next);
                            return Some(cycle);
                        }
                        Color::Black => {}
                    }
                }
                None => {
                    color[node] = Color::Black;
                    stack.pop();
                }
            }
        }
    }

    None
}
