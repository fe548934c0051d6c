use std::io;

use jpush::{Auth, JPushClient, MsgId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let msg_ids_raw = std::env::var("JPUSH_MSG_IDS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JPUSH_MSG_IDS environment variable is required (comma-separated ids)",
        )
    })?;

    let msg_ids = msg_ids_raw
        .split(',')
        .map(|raw| raw.trim().parse::<u64>().map(MsgId::new))
        .collect::<Result<Vec<_>, _>>()?;

    let client = JPushClient::new(Auth::from_env()?)?;
    let reports = client.received_report(&msg_ids).await?;

    for report in reports {
        println!(
            "msg_id: {}, android_received: {:?}, ios_apns_sent: {:?}, ios_msg_received: {:?}",
            report.msg_id, report.android_received, report.ios_apns_sent, report.ios_msg_received
        );
    }

    Ok(())
}
