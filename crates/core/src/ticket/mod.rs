//! Printable production-order tickets.

mod render;

pub use render::OrderTicket;
