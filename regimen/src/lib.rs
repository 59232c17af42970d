//! Workout program editor.
//!
//! Programs are lists of named blocks, each holding a tree of rests,
//! exercises and repeats. Items are reordered and nested by dragging, with
//! the tree/list bookkeeping delegated to [`regimen_ui_tree`].

pub mod config;
pub mod widgets;
