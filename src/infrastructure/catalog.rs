//! Built-in glossary and report summaries.

use crate::domain::entities::knowledge::{EducationEntry, ReportEntry};
use crate::domain::values::report_type::ReportType;

/// (key, term, answer) in lookup order.
const EDUCATION: &[(&str, &str, &str)] = &[
    (
        "market cap",
        "Market Cap (Market Capitalization)",
        "Market cap is the total value of a cryptocurrency. It's calculated by multiplying the current price by the circulating supply. For example, if a coin costs ₹100 and there are 1 million coins in circulation, the market cap is ₹10 crore. It's the most common way to rank cryptocurrencies — Bitcoin has the largest market cap.",
    ),
    (
        "circulating supply",
        "Circulating Supply",
        "Circulating supply is the number of coins that are currently available and trading in the market. It doesn't include coins that are locked, reserved, or not yet released. Think of it like the number of shares of a company that are actually available for trading.",
    ),
    (
        "total supply",
        "Total Supply",
        "Total supply is the total number of coins that exist right now, including locked or reserved ones. It's different from max supply (the absolute maximum that can ever exist) and circulating supply (what's currently tradable).",
    ),
    (
        "max supply",
        "Max Supply",
        "Max supply is the maximum number of coins that will ever exist. Bitcoin's max supply is 21 million — once all are mined, no more will be created. Some coins like Ethereum don't have a max supply cap.",
    ),
    (
        "volume",
        "Trading Volume",
        "Volume is the total amount of a coin that has been traded in a given time period (usually 24 hours). High volume means lots of buying and selling activity — it indicates strong interest and usually better liquidity (easier to buy/sell without affecting the price much).",
    ),
    (
        "defi",
        "DeFi (Decentralized Finance)",
        "DeFi is a system of financial applications built on blockchain networks. Instead of banks or brokers, smart contracts handle lending, borrowing, trading, and earning interest. Popular DeFi platforms include Uniswap, Aave, and Compound. It's like a financial system that runs 24/7 without intermediaries.",
    ),
    (
        "nft",
        "NFT (Non-Fungible Token)",
        "NFTs are unique digital tokens on a blockchain that represent ownership of a specific item — like digital art, music, game items, or collectibles. Unlike Bitcoin where every coin is identical, each NFT is one-of-a-kind. They're mostly on Ethereum and Solana.",
    ),
    (
        "blockchain",
        "Blockchain",
        "A blockchain is a digital ledger that records transactions across many computers. Once data is recorded, it can't be easily changed. Think of it as a shared spreadsheet that everyone can read but no single person controls. Bitcoin and Ethereum are the most well-known blockchains.",
    ),
    (
        "staking",
        "Staking",
        "Staking is locking up your crypto to help validate transactions on a blockchain network. In return, you earn rewards (like interest). It's used in Proof-of-Stake blockchains like Ethereum, Solana, and Cardano. It's similar to earning interest in a savings account, but with higher risk and reward.",
    ),
    (
        "gas fee",
        "Gas Fee",
        "Gas fees are transaction costs on blockchain networks, most commonly Ethereum. Every action on the network (sending tokens, swapping on DEXs, minting NFTs) requires computational work, and gas fees compensate the validators who do that work. Fees spike when the network is congested.",
    ),
    (
        "wallet",
        "Crypto Wallet",
        "A crypto wallet stores your private keys — the passwords that give you access to your cryptocurrency. Hot wallets (MetaMask, Trust Wallet) are connected to the internet for easy access. Cold wallets (Ledger, Trezor) are offline hardware devices for maximum security.",
    ),
    (
        "altcoin",
        "Altcoin",
        "Altcoin means 'alternative coin' — any cryptocurrency other than Bitcoin. Ethereum, Solana, Cardano, and thousands of others are all altcoins. They often move together with Bitcoin but can have their own independent price action based on their own technology and adoption.",
    ),
    (
        "btc dominance",
        "Bitcoin Dominance",
        "BTC Dominance is the percentage of the total crypto market cap that belongs to Bitcoin. When dominance is high (~60%+), it means money is concentrated in Bitcoin. When it drops, it usually means altcoins are gaining traction — often called 'alt season'.",
    ),
    (
        "whale",
        "Whale",
        "A whale is someone who holds a very large amount of cryptocurrency. Their trades can significantly move the market. Tracking whale wallets and their movements (large transfers to/from exchanges) is a popular on-chain analysis technique.",
    ),
    (
        "on-chain",
        "On-Chain Analysis",
        "On-chain analysis examines data directly from the blockchain — wallet movements, exchange flows, active addresses, miner activity, etc. Unlike traditional technical analysis (which looks at price charts), on-chain data shows what holders are actually doing. Exchange outflows, for example, suggest people are holding rather than selling.",
    ),
    (
        "exchange outflows",
        "Exchange Outflows",
        "Exchange outflows happen when crypto is moved from exchanges to private wallets. This is generally seen as bullish because it means people are taking coins off exchanges (where they could easily sell) and into cold storage (long-term holding). The opposite — exchange inflows — can signal selling pressure.",
    ),
    (
        "hodl",
        "HODL",
        "HODL started as a typo for 'hold' in a famous 2013 Bitcoin forum post and became crypto culture. It means holding your cryptocurrency long-term regardless of price drops. 'Diamond hands' is the modern meme version of the same idea.",
    ),
    (
        "dex",
        "DEX (Decentralized Exchange)",
        "A DEX lets you trade crypto directly from your wallet without a middleman. Unlike centralized exchanges (Binance, Coinbase), there's no company holding your funds. Uniswap (Ethereum), Raydium (Solana), and PancakeSwap (BNB Chain) are popular DEXs.",
    ),
    (
        "layer2",
        "Layer 2",
        "Layer 2 solutions are built on top of existing blockchains (Layer 1) to make them faster and cheaper. For Ethereum, popular L2s include Arbitrum, Optimism, and Base. They bundle many transactions together and settle them on the main chain, reducing fees dramatically.",
    ),
    (
        "halving",
        "Bitcoin Halving",
        "Bitcoin halving is an event that happens roughly every 4 years where the mining reward is cut in half. It reduces the rate of new Bitcoin creation, making it more scarce. Historically, halvings have preceded major bull runs. The most recent halving was in April 2024.",
    ),
];

pub fn education() -> Vec<EducationEntry> {
    EDUCATION
        .iter()
        .map(|(key, term, answer)| EducationEntry {
            key: key.to_string(),
            term: term.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

pub fn reports() -> Vec<ReportEntry> {
    vec![
        ReportEntry {
            id: "bitcoin-vector-37".into(),
            title: "The Bitcoin Vector #37".into(),
            category: "VECTOR".into(),
            report_type: ReportType::Premium,
            date: "2026-01".into(),
            summary: "Bitcoin enters 2026 attempting to stabilise after its Q4 drawdown. The Vector models suggest a subtle shift in momentum as long-term holders continue accumulating while short-term volatility remains elevated. Key support levels and resistance zones are analyzed with on-chain metrics pointing to a potential accumulation phase.".into(),
            keywords: to_strings(&[
                "bitcoin", "btc", "vector", "momentum", "q4", "drawdown", "accumulation", "support",
                "resistance", "long-term holders",
            ]),
        },
        ReportEntry {
            id: "week-on-chain-2-2026".into(),
            title: "Week On-Chain #2 2026".into(),
            category: "WEEK ON-CHAIN".into(),
            report_type: ReportType::Free,
            date: "2026-01".into(),
            summary: "Bitcoin shows early signs of stabilization as exchange outflows pick up, indicating growing holder conviction. On-chain data reveals accumulation patterns across multiple cohorts, with whale addresses increasing their positions. Network activity metrics show steady usage despite the recent price correction.".into(),
            keywords: to_strings(&[
                "bitcoin", "btc", "on-chain", "exchange outflows", "stabilization", "whale",
                "accumulation", "network activity", "holder",
            ]),
        },
    ]
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
