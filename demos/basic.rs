use gym_session_http::{AuthOutcome, GymSessionClient, RequestOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let email = std::env::var("GYM_EMAIL")?;
    let password = std::env::var("GYM_PASSWORD")?;

    let client = GymSessionClient::from_env().map_err(anyhow::Error::msg)?;
    client.login(&email, &password).await?;

    match client
        .auth_fetch("/gym/profile", &RequestOptions::get())
        .await?
    {
        AuthOutcome::Success(response) => {
            println!("{}", response.status());
            println!("{}", response.text().await?);
        }
        AuthOutcome::NeedsLogin { login_url } => {
            println!("session expired, log in again at {login_url}");
        }
    }

    client.logout().await?;
    Ok(())
}
