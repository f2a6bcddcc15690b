//! The cards shipped with the landing site.

use crate::card::CardDescriptor;

#[allow(clippy::too_many_arguments)]
fn standard(
    id: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    key_points: [&str; 3],
    repo_path: &str,
    gitbook_path: &str,
    icon: &str,
) -> CardDescriptor {
    CardDescriptor::new(id, title, subtitle)
        .with_description(description)
        .with_key_points(key_points)
        .with_docs(repo_path, gitbook_path)
        .with_icon(icon)
}

pub(crate) fn cards() -> Vec<CardDescriptor> {
    vec![
        CardDescriptor::new("welcome", "Welcome to Zenon", "Network of Momentum")
            .with_docs("README.md", "")
            .with_icon("◈")
            .with_video("https://player.vimeo.com/video/1149191553?h=3714720383")
            .with_bg_color("#000001"),
        standard(
            "problem",
            "The Blockchain Bottleneck",
            "Why Every Chain Is Slow",
            "On Ethereum, 10,000 computers run the same code for every transaction. \
             That's like asking every employee in a company to do the same task. \
             Wasteful, slow, and expensive.",
            [
                "Every validator re-executes every transaction",
                "You pay fees because validators charge for their work",
                "The more users, the slower it gets",
            ],
            "README.md",
            "",
            "⚠️",
        ),
        standard(
            "insight",
            "What If They Didn't Have To?",
            "A Fundamental Rethinking",
            "What if validators only checked that your answer was correct without \
             redoing all the math? That's the insight behind Zenon.",
            [
                "You do the work on your device",
                "The network only verifies the result",
                "No redundant computation",
            ],
            "docs/research/taxonomy-deterministic-fact-acceptance.md",
            "research/taxonomy-deterministic-fact-acceptance",
            "💡",
        ),
        standard(
            "dual-ledger",
            "Your Account Is Your Blockchain",
            "The Dual-Ledger Architecture",
            "In Zenon, every user has their own mini-blockchain in your browser. \
             Your transactions don't compete with anyone else's. \
             It's like having your own lane on the highway.",
            [
                "Account-chains: Your personal ledger",
                "Momentums: The global timestamp",
                "True parallelism—no traffic jams",
            ],
            "docs/architecture/architecture-overview.md",
            "architecture/architecture-overview",
            "⧈",
        ),
        standard(
            "parallel",
            "Parallel, Not Sequential",
            "Everyone Moves at Once",
            "Traditional blockchains are like a single checkout lane. \
             Zenon is like a supermarket where everyone has their own self-checkout.",
            [
                "No competing for block space",
                "Your speed doesn't depend on network load",
                "Scales naturally with users",
            ],
            "docs/architecture/architecture-overview.md",
            "architecture/architecture-overview",
            "🛤️",
        ),
        standard(
            "feeless",
            "No Fees. Ever.",
            "Dynamic Plasma",
            "Gas fees exist because validators charge for their work. \
             Since Zenon validators don't re-execute, there's no work to charge for. Simple.",
            [
                "No gas auctions",
                "No paying $50 for a simple transfer",
                "The network adapts to load without fees",
            ],
            "docs/notes/dynamic-plasma.md",
            "notes/dynamic-plasma",
            "🆓",
        ),
        standard(
            "browser",
            "Run a Node in Your Browser",
            "Not a Light Client—A Real Peer",
            "Other blockchains require you to trust a server. On Zenon, your browser \
             downloads a tiny amount of data and verifies everything itself. No middleman.",
            [
                "No Infura, no Alchemy, no trust",
                "Verify transactions yourself",
                "Instant onboarding—no 24-hour sync",
            ],
            "docs/research/browser-light-client-overview.md",
            "research/browser-light-client-overview",
            "🌐",
        ),
        standard(
            "dfa",
            "Proof, Not Replay",
            "Deterministic Fact Acceptance",
            "Most blockchains re-watch the whole movie to check the ending. \
             Zenon just checks the final frame is correctly signed. \
             Same result, fraction of the work.",
            [
                "Facts are verified cryptographically",
                "No virtual machine at consensus",
                "Results are provable without re-computation",
            ],
            "docs/research/taxonomy-deterministic-fact-acceptance.md",
            "research/taxonomy-deterministic-fact-acceptance",
            "✓",
        ),
        standard(
            "zapps",
            "Execute Locally, Anchor Globally",
            "zApps & Client-Side Logic",
            "Run complex applications on your own device. When you're done, submit a \
             cryptographic commitment to your account-chain. \
             The network never runs your code—it just stamps your work.",
            [
                "Apps run in your browser",
                "Submit results, not code",
                "Instant execution, no network wait",
            ],
            "docs/notes/execution-model.md",
            "notes/execution-model",
            "⬡",
        ),
        standard(
            "cross-chain",
            "Connect Without Trusting",
            "Cross-Chain Verification",
            "Want to verify a Bitcoin transaction? Zenon can check it directly—no bridge \
             operators, no wrapped tokens, no trust assumptions. Pure cryptography.",
            [
                "Verify Bitcoin transactions natively",
                "No bridge operators to trust",
                "True interoperability",
            ],
            "docs/proposals/bitcoin-spv-engineering.md",
            "proposals/bitcoin-spv-engineering",
            "🔗",
        ),
        standard(
            "architecture",
            "How It All Fits Together",
            "Sentries → Sentinels → Pillars",
            "A layered system where execution happens on your device, spam is filtered \
             in the middle, and consensus only handles ordering. Simple, elegant, scalable.",
            [
                "Sentries: Your device executes",
                "Sentinels: Filter and verify",
                "Pillars: Finalize the order",
            ],
            "docs/notes/node-architecture.md",
            "notes/node-architecture",
            "🏗️",
        ),
        standard(
            "vision",
            "The Network of Momentum",
            "A New Foundation",
            "Imagine thousands of browser-based peers, running full applications, \
             without fees, servers, or central infrastructure. \
             That's not a dream. That's Zenon.",
            [
                "Sovereign users",
                "No central points of failure",
                "Built for the next decade",
            ],
            "README.md",
            "",
            "◈",
        ),
    ]
}
