use std::io;

use nexmo_sms::{Credentials, MessageText, NexmoClient, decode_inbound_message_query};

/// Usage: `inbound_reply '<query string of the inbound webhook>'`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "pass the webhook query string as the first argument",
        )
    })?;
    let inbound = decode_inbound_message_query(&query)?;
    println!("{} -> {}: {}", inbound.from, inbound.to, inbound.text);

    let (Ok(key), Ok(secret)) = (
        std::env::var("NEXMO_API_KEY"),
        std::env::var("NEXMO_API_SECRET"),
    ) else {
        println!("NEXMO_API_KEY/NEXMO_API_SECRET not set, not replying");
        return Ok(());
    };

    let client = NexmoClient::new(Credentials::new(key, secret)?);
    let reply = MessageText::new(format!("Got it: {}", inbound.text))?;
    let result = client.reply(&inbound, reply).await?;
    println!("{}", result.overview());

    Ok(())
}
