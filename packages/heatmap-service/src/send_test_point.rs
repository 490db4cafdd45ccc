use serde_json::{json, Value};

// Posts one point to a running heatmap service and prints the reply.
// Usage: send_test_point [lat] [lon] [base_url]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    // London by default
    let lat: f64 = args.next().map(|s| s.parse::<f64>()).transpose()?.unwrap_or(51.5074);
    let lon: f64 = args.next().map(|s| s.parse::<f64>()).transpose()?.unwrap_or(-0.1278);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let data_point = json!({ "lat": lat, "lon": lon });
    println!("Posting {} to {}/add_point", data_point, base_url);

    let response = reqwest::Client::new()
        .post(format!("{}/add_point", base_url))
        .json(&data_point)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;
    println!("{}: {}", status, serde_json::to_string_pretty(&body)?);

    let heatmap: Value = reqwest::get(format!("{}/", base_url)).await?.json().await?;
    let cells = heatmap.as_array().map(|cells| cells.len()).unwrap_or(0);
    println!("Heatmap now has {} cells", cells);

    Ok(())
}
