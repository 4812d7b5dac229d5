//! Integration tests spanning the text codec, range resolution and the SQL
//! encoding of `allocmap-common`.

mod codec;
mod ranges;
mod storage;
