pub mod get_parser_status;
pub mod match_candidates;
pub mod parse_ai;
pub mod parse_quick;
