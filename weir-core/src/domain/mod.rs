//! Core domain types
//!
//! This module contains the domain structures the editor works with. These
//! types represent the entities a user assembles and deploys (pipelines and
//! their elements), the edge nodes they can be deployed to, and the static
//! catalogs backing the editor's forms.

pub mod category;
pub mod datatype;
pub mod node;
pub mod pipeline;
