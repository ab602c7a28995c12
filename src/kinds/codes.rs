//! Stable string codes for programmatic fault handling
//!
//! Codes are part of the public contract: match on these rather than on
//! display strings when routing faults.

#![allow(missing_docs)] // Code names are self-explanatory

// Input fault codes
pub const PARSE_FAULT: &str = "PARSE_FAULT";
pub const VALIDATION_FAULT: &str = "VALIDATION_FAULT";
pub const NOT_FOUND_FAULT: &str = "NOT_FOUND_FAULT";
pub const INVALID_ARGUMENT_FAULT: &str = "INVALID_ARGUMENT_FAULT";

// Internal fault codes
pub const CONVERSION_FAULT: &str = "CONVERSION_FAULT";
pub const IO_FAULT: &str = "IO_FAULT";
pub const UNSUPPORTED_FAULT: &str = "UNSUPPORTED_FAULT";

// Fault categories
pub const CATEGORY_INPUT: &str = "INPUT";
pub const CATEGORY_INTERNAL: &str = "INTERNAL";
