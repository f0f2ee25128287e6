use std::io;
use std::time::Duration;

use nexmo_sms::{Credentials, MessageText, NexmoClient, Originator, RawPhoneNumber, SendText};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let key = required_env("NEXMO_API_KEY")?;
    let secret = required_env("NEXMO_API_SECRET")?;
    let phone_raw = required_env("NEXMO_TO")?;
    let from = std::env::var("NEXMO_FROM").unwrap_or_else(|_| "MyApp".to_owned());
    let message =
        std::env::var("NEXMO_MESSAGE").unwrap_or_else(|_| "Hello from nexmo-sms.".to_owned());

    let client = NexmoClient::builder(Credentials::new(key, secret)?)
        .timeout(Duration::from_secs(10))
        .build()?;
    let request = SendText::new(
        RawPhoneNumber::new(phone_raw)?,
        Originator::new(from),
        MessageText::new(message)?,
    );

    let result = client.send_text(request).await?;
    println!("{}", result.overview());

    Ok(())
}
