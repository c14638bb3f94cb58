use crate::components::normalize::{dedup_by_address, normalize_entries, Result, SourceKind};
use crate::config::alpha::{ALPHA_CATEGORY, ALPHA_PAGE_COUNT, ALPHA_PAGE_SIZE};
use crate::models::token::Token;
use crate::utils::fetcher::Fetcher;

pub fn market_page_urls(base_url: &str) -> Vec<String> {
    (1..=ALPHA_PAGE_COUNT)
        .map(|page| {
            format!(
                "{}/api/v3/coins/markets?vs_currency=usd&category={}&order=market_cap_desc&per_page={}&page={}&sparkline=false&locale=en&price_change_percentage=24h",
                base_url, ALPHA_CATEGORY, ALPHA_PAGE_SIZE, page
            )
        })
        .collect()
}

pub async fn fetch_alpha_tokens(fetcher: &Fetcher, base_url: &str) -> Result<Vec<Token>> {
    let pages = fetcher.fetch_batch(&market_page_urls(base_url)).await?;
    let mut tokens: Vec<Token> = Vec::new();

    for page in &pages {
        tokens.extend(normalize_entries(SourceKind::Alpha, page)?);
    }

    Ok(dedup_by_address(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::normalize::CatalogError;
    use crate::utils::fetcher::FetchError;
    use mockito::Matcher;
    use serde_json::json;
    use std::time::Duration;

    fn one_shot_fetcher() -> Fetcher {
        Fetcher::with_policy(1, Duration::from_millis(1), Duration::from_secs(5))
    }

    fn page_mock(server: &mut mockito::Server, page: &str, body: serde_json::Value) -> mockito::Mock {
        server
            .mock("GET", "/api/v3/coins/markets")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("vs_currency".into(), "usd".into()),
                Matcher::UrlEncoded("category".into(), ALPHA_CATEGORY.into()),
                Matcher::UrlEncoded("per_page".into(), ALPHA_PAGE_SIZE.to_string()),
                Matcher::UrlEncoded("page".into(), page.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
    }

    #[test]
    fn three_pages_are_requested_in_order() {
        let urls = market_page_urls("https://api.example");
        assert_eq!(urls.len(), ALPHA_PAGE_COUNT as usize);
        assert!(urls[0].contains("page=1"));
        assert!(urls[1].contains("page=2"));
        assert!(urls[2].contains("page=3"));
        assert!(urls.iter().all(|u| u.starts_with("https://api.example/api/v3/coins/markets?")));
    }

    #[tokio::test]
    async fn pages_flatten_in_order_and_dedup_across_pages() {
        let mut server = mockito::Server::new_async().await;
        let first = page_mock(
            &mut server,
            "1",
            json!([
                { "id": "popcat", "symbol": "popcat", "name": "Popcat", "image": "u1", "current_price": 0.1 },
                { "id": "kmno", "symbol": "kmno", "name": "Kamino", "image": "u2", "current_price": 0.07 }
            ]),
        )
        .create_async()
        .await;
        let second = page_mock(
            &mut server,
            "2",
            json!([
                { "id": "wen", "symbol": "wen", "name": "Wen", "image": "u3", "current_price": 0.0001 }
            ]),
        )
        .create_async()
        .await;
        let third = page_mock(
            &mut server,
            "3",
            json!([
                { "id": "popcat", "symbol": "popcat", "name": "Popcat", "image": "u1", "current_price": 0.2 }
            ]),
        )
        .create_async()
        .await;

        let tokens = fetch_alpha_tokens(&one_shot_fetcher(), &server.url())
            .await
            .unwrap();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].address, "popcat");
        assert_eq!(tokens[0].price, 0.2);
        assert_eq!(tokens[1].address, "kmno");
        assert_eq!(tokens[2].address, "wen");
        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
    }

    #[tokio::test]
    async fn failing_page_fails_the_fetch() {
        let mut server = mockito::Server::new_async().await;
        let _ok = page_mock(&mut server, "1", json!([])).create_async().await;
        let _ok = page_mock(&mut server, "2", json!([])).create_async().await;
        let _bad = server
            .mock("GET", "/api/v3/coins/markets")
            .match_query(Matcher::UrlEncoded("page".into(), "3".into()))
            .with_status(502)
            .create_async()
            .await;

        let err = fetch_alpha_tokens(&one_shot_fetcher(), &server.url())
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::Fetch(FetchError::Status(502)));
    }

    #[tokio::test]
    async fn non_array_page_is_malformed() {
        let mut server = mockito::Server::new_async().await;
        let _pages = page_mock(&mut server, "1", json!([])).create_async().await;
        let _pages = page_mock(&mut server, "2", json!({ "error": "rate limited" }))
            .create_async()
            .await;
        let _pages = page_mock(&mut server, "3", json!([])).create_async().await;

        let err = fetch_alpha_tokens(&one_shot_fetcher(), &server.url())
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::MalformedResponse(_, _)));
    }
}
