pub mod crc12;
pub mod ldpc;
pub mod ldpc_consts;
pub mod symbol_map;
