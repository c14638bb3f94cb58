use crate::models::token::Token;

pub fn common_tokens() -> Vec<Token> {
    vec![
        Token {
            symbol: "SOL".to_string(),
            name: "Solana".to_string(),
            address: "So11111111111111111111111111111111111111112".to_string(),
            logo: Some("/solana-sol-logo.png".to_string()),
            decimals: 9,
            price: 0.0,
            market_cap: 0.0,
            volume_24h: 0.0,
        },
        Token {
            symbol: "USDC".to_string(),
            name: "USD Coin".to_string(),
            address: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
            logo: Some("/usdc-logo.png".to_string()),
            decimals: 6,
            price: 0.0,
            market_cap: 0.0,
            volume_24h: 0.0,
        },
    ]
}

pub fn seed_alpha_tokens() -> Vec<Token> {
    vec![
        Token {
            symbol: "POPCAT".to_string(),
            name: "Popcat".to_string(),
            address: "7GCihgDB8fe6KNjn2MYtkzZcRjQy3t9GHdC8uHYmW2hr".to_string(),
            logo: Some(
                "https://bafkreidvkvuzyslw5jh5z242lgzwzhbi2kxxnpkic5wsvyno5ikvpr7reu.ipfs.nftstorage.link"
                    .to_string(),
            ),
            decimals: 9,
            price: 0.0,
            market_cap: 0.0,
            volume_24h: 0.0,
        },
        Token {
            symbol: "KMNO".to_string(),
            name: "Kamino".to_string(),
            address: "3LDjnhekVVqdxDmhD5vLHg5LfhxfW9naVyG9NfZqs7DT".to_string(),
            logo: Some(
                "https://coin-images.coingecko.com/coins/images/35801/large/tP0Lcgwp_400x400.jpg?1709824189"
                    .to_string(),
            ),
            decimals: 9,
            price: 0.071029,
            market_cap: 45073115.0,
            volume_24h: 0.0,
        },
    ]
}
