//! Prediction subdomain: form inputs, responses, request state and the
//! pure mappers that turn a probability into display attributes.

pub mod importance;
pub mod input;
pub mod response;
pub mod risk;
pub mod state;
