mod json_envelope;

pub use json_envelope::*;
