use anyhow::{anyhow, Result};

use folio_core::contact::{ContactClient, ContactMessage, SubmitNotice};
use folio_core::AppConfig;

pub async fn run(config: &AppConfig, name: String, email: String, message: String) -> Result<()> {
    let client = ContactClient::new(&config.contact)?;

    let message = ContactMessage {
        name,
        email,
        message,
    };

    let result = client.submit(&message).await;
    let notice = SubmitNotice::from_result(&result);
    println!("{}", notice.message());

    if notice.is_success() {
        Ok(())
    } else {
        Err(anyhow!("submission failed"))
    }
}
