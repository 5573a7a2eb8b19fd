mod format_float;
mod format_int;
mod parse_bad;
mod parse_good;
