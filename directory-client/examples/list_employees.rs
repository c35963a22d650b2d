//! Print the directory as seen through the API.
//!
//! Run: `API_URL=http://localhost:3000 cargo run -p directory-client --example list_employees`

use directory_client::{ClientConfig, EmployeeApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_client=debug".into()),
        )
        .init();

    let client = ClientConfig::from_env().build_http_client()?;
    println!("API: {}", client.base_url());

    let health = client.health().await?;
    println!("health: {}", health.status);

    for employee in client.list_employees().await? {
        println!(
            "{:<10} {:<28} {:<16} {:<22} {:>10} {}",
            employee.id,
            employee.full_name(),
            employee.department,
            employee.position,
            employee.salary,
            employee.status,
        );
    }
    Ok(())
}
