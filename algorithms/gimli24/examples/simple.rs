//! GIMLI-24 Basic Example
//!
//! Minimal usage: seal, open and hash with the one-shot API.

#![allow(clippy::pedantic, clippy::nursery)]

fn main() -> Result<(), gimli24::AuthenticationFailure> {
    let key = [0x42u8; gimli24::KEY_SIZE];
    let nonce = [0x24u8; gimli24::NONCE_SIZE];
    let data = b"Hello, World!";

    let sealed = gimli24::encrypt(data, b"header", &nonce, &key);
    let opened = gimli24::decrypt(&sealed, b"header", &nonce, &key)?;

    println!("Data:   {:?}", String::from_utf8_lossy(data));
    println!("Sealed: {}", hex::encode(&sealed));
    println!("Opened: {:?}", String::from_utf8_lossy(&opened));
    println!("Hash:   {}", hex::encode(gimli24::hash(data)));
    Ok(())
}
