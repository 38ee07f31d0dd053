//! Core of the roll lookup: the
//! voter row shape and the
//! PostgREST client that searches
//! the hosted `voters` table.

pub mod domain;
pub mod infra;
