use clap::Parser;
use serde::Deserialize;
use std::io::{self, Write};

/// Command-line client for a running Savora server
#[derive(Parser, Debug)]
#[command(name = "savora-cli")]
#[command(about = "Query the Savora recommender from the terminal", long_about = None)]
struct Args {
    /// Your restaurant query (e.g., "Spicy Italian in Bangalore")
    query: Option<String>,

    /// Number of recommendations to retrieve
    #[arg(long, default_value_t = 5)]
    top_k: usize,

    /// Base URL of the Savora server
    #[arg(long, default_value = "http://localhost:8000")]
    url: String,
}

#[derive(Debug, Deserialize)]
struct Restaurant {
    name: String,
    cuisine: String,
    location: String,
    rating: String,
    cost: String,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecommendationResponse {
    restaurants: Vec<Restaurant>,
    ai_analysis: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let query = match args.query {
        Some(q) => q,
        None => match build_query_interactively()? {
            Some(q) => q,
            None => {
                println!("No preferences provided. Exiting.");
                return Ok(());
            }
        },
    };

    if query.trim().is_empty() {
        println!("Empty query. Exiting.");
        return Ok(());
    }

    println!("\nSearching for: '{query}'...");

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/recommend", args.url))
        .json(&serde_json::json!({"query": query, "top_k": args.top_k}))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("server returned {status}: {body}");
    }

    let data: RecommendationResponse = response.json().await?;
    println!("\n{}", format_recommendations(&data));
    Ok(())
}

/// Compose a query from three short answers when none was given on the
/// command line.
fn build_query_interactively() -> io::Result<Option<String>> {
    println!("Welcome to Savora!");
    println!("Let's find you the perfect place to eat.");

    let cuisine = ask("1. What cuisine are you craving? (e.g., North Indian, Italian): ")?;
    let location = ask("2. Which location do you prefer? (e.g., Koramangala, Indiranagar): ")?;
    let budget = ask("3. What is your budget for two? (e.g., 500, 1000): ")?;

    let mut parts = Vec::new();
    if !cuisine.is_empty() {
        parts.push(format!("{cuisine} food"));
    }
    if !location.is_empty() {
        parts.push(format!("in {location}"));
    }
    if !budget.is_empty() {
        parts.push(format!("budget around {budget}"));
    }

    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join(" ")))
    }
}

fn ask(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn format_analysis(analysis: &str) -> String {
    if analysis.is_empty() {
        return "No analysis available.".to_string();
    }
    let rule = "=".repeat(50);
    format!("{rule}\nAI ANALYSIS\n{rule}\n{analysis}\n")
}

fn format_restaurant_card(index: usize, restaurant: &Restaurant) -> String {
    let mut card = vec![
        format!("{index}. {}", restaurant.name),
        format!("   Cuisine: {}", restaurant.cuisine),
        format!("   Location: {}", restaurant.location),
        format!("   Rating: {} | Cost: {}", restaurant.rating, restaurant.cost),
    ];

    if let Some(url) = &restaurant.url {
        card.push(format!("   URL: {url}"));
    }

    card.push("-".repeat(30));
    card.join("\n")
}

fn format_recommendations(data: &RecommendationResponse) -> String {
    let rule = "=".repeat(50);
    let mut output = vec![
        format_analysis(&data.ai_analysis),
        format!("{rule}\nTOP RESTAURANTS\n{rule}"),
    ];

    if data.restaurants.is_empty() {
        output.push("No restaurants found.".to_string());
    } else {
        for (i, restaurant) in data.restaurants.iter().enumerate() {
            output.push(format_restaurant_card(i + 1, restaurant));
        }
    }

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(name: &str, url: Option<&str>) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            cuisine: "Italian".to_string(),
            location: "Koramangala".to_string(),
            rating: "4.2".to_string(),
            cost: "900".to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_card_layout() {
        let card = format_restaurant_card(1, &restaurant("Onesto", None));
        assert!(card.starts_with("1. Onesto"));
        assert!(card.contains("   Cuisine: Italian"));
        assert!(card.contains("   Rating: 4.2 | Cost: 900"));
        assert!(!card.contains("URL:"));
        assert!(card.ends_with(&"-".repeat(30)));
    }

    #[test]
    fn test_card_includes_url_when_present() {
        let card = format_restaurant_card(2, &restaurant("Onesto", Some("https://example.com")));
        assert!(card.contains("   URL: https://example.com"));
    }

    #[test]
    fn test_empty_result_message() {
        let data = RecommendationResponse {
            restaurants: Vec::new(),
            ai_analysis: "Nothing matched.".to_string(),
        };
        let display = format_recommendations(&data);
        assert!(display.contains("AI ANALYSIS"));
        assert!(display.contains("Nothing matched."));
        assert!(display.contains("No restaurants found."));
    }

    #[test]
    fn test_cards_numbered_from_one() {
        let data = RecommendationResponse {
            restaurants: vec![restaurant("A", None), restaurant("B", None)],
            ai_analysis: "ok".to_string(),
        };
        let display = format_recommendations(&data);
        assert!(display.contains("1. A"));
        assert!(display.contains("2. B"));
    }

    #[test]
    fn test_blank_analysis_placeholder() {
        assert_eq!(format_analysis(""), "No analysis available.");
    }
}
