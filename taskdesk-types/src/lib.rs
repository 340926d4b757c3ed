mod query;
mod task;
mod title;

pub use crate::{query::*, task::*, title::*};
