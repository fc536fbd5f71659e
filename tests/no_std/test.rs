#![no_std]

/// Decodes a code word and encodes the result again without `std`.
pub fn reencode(
    block: &[u8; bc7::BC7_BLOCK_SIZE],
) -> Result<[u8; bc7::BC7_BLOCK_SIZE], bc7::Error> {
    let pixels = bc7::decode_block(block)?;
    Ok(bc7::encode_block(&pixels))
}

pub fn mode(block: &[u8; bc7::BC7_BLOCK_SIZE]) -> Option<u8> {
    bc7::block_mode(block)
}
