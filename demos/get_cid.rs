use jpush::{Auth, CidType, JPushClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let count = match std::env::var("JPUSH_CID_COUNT") {
        Ok(raw) => raw.parse::<u32>()?,
        Err(_) => 1,
    };

    let client = JPushClient::new(Auth::from_env()?)?;
    let response = client.cid_allocate(count, CidType::Push).await?;

    println!("cidlist: {:?}", response.cids);

    Ok(())
}
