use std::io;

use jpush::{Audience, Auth, JPushClient, Notification, Options, Platform, PushPayload};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registration_id = std::env::var("JPUSH_REGISTRATION_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JPUSH_REGISTRATION_ID environment variable is required",
        )
    })?;
    let alert = std::env::var("JPUSH_ALERT")
        .unwrap_or_else(|_| "Hello from the jpush demo.".to_owned());

    let client = JPushClient::new(Auth::from_env()?)?;

    let mut audience = Audience::default();
    audience.set_registration_id([registration_id]);
    let options = Options {
        time_to_live: Some(60),
        ..Default::default()
    };
    let payload = PushPayload::new(Platform::All, audience)
        .with_notification(Notification::alert(alert))
        .with_options(options);

    let result = client.push(&payload).await?;
    println!("msg_id: {}, sendno: {:?}", result.msg_id, result.sendno);

    Ok(())
}
