use std::io;

use jpush::{Auth, JPushClient, SmsPayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mobile = std::env::var("JPUSH_SMS_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JPUSH_SMS_MOBILE environment variable is required",
        )
    })?;
    let temp_id = std::env::var("JPUSH_SMS_TEMP_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "JPUSH_SMS_TEMP_ID environment variable is required",
            )
        })?
        .parse::<u64>()?;

    let mut payload = SmsPayload::new(mobile, temp_id);
    if let Ok(code) = std::env::var("JPUSH_SMS_CODE") {
        payload.add_param("code", code);
    }

    let client = JPushClient::new(Auth::from_env()?)?;
    let response = client.send_sms(&payload).await?;
    println!("msg_id: {}", response.msg_id);

    Ok(())
}
