pub type Cell = u8;
pub type Address = usize; // index into a compiled program
pub type Count = usize;
