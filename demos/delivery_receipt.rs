use std::io;

use nexmo_sms::decode_delivery_receipt_query;

/// Usage: `delivery_receipt '<query string of the receipt webhook>'`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let query = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "pass the webhook query string as the first argument",
        )
    })?;

    match decode_delivery_receipt_query(&query)? {
        Some(receipt) => println!(
            "message {} to {} via {}: {} at {}",
            receipt.message_id,
            receipt.to,
            receipt.network,
            receipt.status,
            receipt.received_time.value()
        ),
        None => println!("no delivery receipt in payload"),
    }

    Ok(())
}
