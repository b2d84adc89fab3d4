//! Draggable-item canvas editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It paints a
//! stack of rectangular items (usually images) onto a `<canvas>`, lets the user
//! pick one up with the pointer and drag it around, and keeps the layout
//! proportional when the canvas is resized. The host page only creates an
//! [`web::Editor`] and feeds it images; DOM events and timers are wired by
//! the editor itself.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Browser-independent [`controller::Controller`]: item stack, hit-testing, drag, resize |
//! | [`item`] | A single draggable rectangle and its render callback |
//! | [`hit`] | Top-down hit-testing over the item stack |
//! | [`input`] | Drag state machine and host [`input::Action`]s |
//! | [`debounce`] | Time-windowed rate limiter for resize and pointer-move |
//! | [`surface`] | Drawing-target traits implemented by the browser canvas and test doubles |
//! | [`geometry`] | Points, sizes, rectangles |
//! | [`config`] | Controller and `draw_image` configuration |
//! | [`id`] | Per-controller item id generator |
//! | [`error`] | Crate error type |
//! | [`web`] | `web-sys` canvas surface, image loading, and the JS-facing editor |
//! | [`consts`] | Shared defaults (border width, debounce windows, colours) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod id;
pub mod input;
pub mod item;
pub mod surface;
pub mod web;

#[cfg(test)]
mod testing;
