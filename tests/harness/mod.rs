#![allow(dead_code, unused_imports)]

pub(crate) mod fake_model;
pub(crate) mod test_context;

pub(crate) use fake_model::FakeModel;
pub(crate) use test_context::TestContext;
