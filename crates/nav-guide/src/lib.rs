//! `nav-guide` — natural-language step instructions for computed routes.
//!
//! Instruction generation is pure string work over an annotated
//! [`Route`][nav_route::Route]; it never touches the graph.  The language of
//! the rendered text is chosen per call via [`Lang`][nav_core::Lang], while
//! keyword classification always inspects the primary label variant so a
//! display-language switch can never change which rule fires.

pub mod steps;

#[cfg(test)]
mod tests;

pub use steps::{reached_announcement, voice_steps};
