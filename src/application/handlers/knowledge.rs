use super::ResponseHandlers;
use crate::domain::values::report_type::ReportType;

pub const EMPTY_PROMPT: &str =
    "Go ahead, ask me something about crypto! Type **help** to see what I can do.";

pub const GREETINGS: &[&str] = &[
    "Hey! 👋 I'm CryptoBot, your on-chain companion. Ask me about prices, market trends, top gainers, or anything crypto!",
    "Hello! I can help you with crypto prices, market overviews, coin comparisons, and more. What do you want to know?",
    "Namaste! 🙏 Ready to talk crypto. Try asking me 'How's the market?' or 'What's the price of ETH?'",
];

pub const NOT_UNDERSTOOD: &[&str] = &[
    "I'm not sure I understood that. Here are some things you can try:",
    "Hmm, I didn't quite get that. Maybe try one of these:",
    "I'm best at crypto-related questions! Here are some ideas:",
];

const SUGGESTIONS: &str = "• \"How's the market today?\"
• \"Price of Bitcoin\"
• \"Top gainers today\"
• \"Compare ETH vs SOL\"
• \"What is DeFi?\"
• \"Latest report summary\"

Or type **help** to see all my capabilities!";

const HELP: &str = "Here's what I can help you with:

🔹 **Market Overview** — \"How's the market today?\"
🔹 **Price Check** — \"What's the price of BTC?\"
🔹 **Top Gainers** — \"Which coin gained the most?\"
🔹 **Top Losers** — \"Who lost the most today?\"
🔹 **Trending** — \"What's trending right now?\"
🔹 **Compare** — \"Compare ETH vs SOL\"
🔹 **Coin Info** — \"Tell me about Cardano\"
🔹 **Reports** — \"What does the latest report say?\"
🔹 **Learn** — \"What is DeFi?\" / \"Explain staking\"

Just type naturally — I'll figure out what you mean!";

impl ResponseHandlers {
    pub fn greeting(&self) -> String {
        self.pick(GREETINGS).to_string()
    }

    pub fn help(&self) -> String {
        HELP.to_string()
    }

    /// First glossary match, or `None` so the caller can fall through.
    pub fn education(&self, message: &str) -> Option<String> {
        self.knowledge
            .search_education(message)
            .first()
            .map(|entry| format!("📖 **{}**\n\n{}", entry.term, entry.answer))
    }

    pub fn report(&self, message: &str) -> String {
        let results = self.knowledge.search_reports(message);
        let Some(best) = results.first() else {
            let listing = self
                .knowledge
                .reports()
                .iter()
                .map(|r| format!("📑 **{}** ({}) — {}", r.title, r.report_type.badge(), first_sentence(&r.summary)))
                .collect::<Vec<_>>()
                .join("\n");
            return format!(
                "Here are the available reports:\n\n{listing}\n\n\
                 Ask me something specific like \"What does the Bitcoin Vector say about momentum?\" or \"Summarize the on-chain report.\""
            );
        };

        let r = &best.report;
        let mut out = format!("📑 **{}** ({})\n\n{}", r.title, r.report_type.badge(), r.summary);
        if r.report_type == ReportType::Premium {
            out.push_str("\n\n_This is a premium report. Upgrade to access the full analysis._");
        }
        out
    }

    pub fn unknown(&self) -> String {
        format!("{}\n\n{SUGGESTIONS}", self.pick(NOT_UNDERSTOOD))
    }
}

fn first_sentence(text: &str) -> &str {
    match text.find(". ") {
        Some(idx) => &text[..=idx],
        None => text,
    }
}
