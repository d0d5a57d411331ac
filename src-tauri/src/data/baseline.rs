//! 基线数据集
//!
//! 与前端共同约定的内置数据,进程内只构造一次:
//! - 10位用户资料,首位即会话用户(用户撰写帖子的作者身份)
//! - 16条基线帖子,ID为 `"1"` 到 `"16"`,与UUID新帖绝不冲突
//! - 固定分类词表、热门话题、市场指数行情
//!
//! 基线帖子的顺序就是展示顺序,聚合器不重排。

use once_cell::sync::Lazy;

use crate::models::market::{MarketIndex, TrendingTopic};
use crate::models::post::{Poll, PollOption, Post, Sentiment};
use crate::models::user_profile::{InvestorType, UserProfile};

/// 个性化信息流的固定分类词表
pub const INVESTMENT_CATEGORIES: [&str; 10] = [
    "Stocks",
    "Crypto",
    "Real Estate",
    "ETFs",
    "Commodities",
    "Forex",
    "Startups",
    "Bonds",
    "Options",
    "Retirement",
];

/// 基线用户资料
pub static BASELINE_USERS: Lazy<Vec<UserProfile>> = Lazy::new(|| {
    vec![
        UserProfile {
            id: "1".to_string(),
            name: "Alex Morgan".to_string(),
            username: "alexm_investor".to_string(),
            avatar: "https://i.pravatar.cc/150?img=1".to_string(),
            verified: true,
            investor_type: InvestorType::Expert,
            followers: 24800,
            following: 342,
            joined: "January 2021".to_string(),
            reputation: 98,
            bio: "Investment analyst | Fintech enthusiast | 10+ years in market | Sharing insights on stocks, crypto, and economic trends.".to_string(),
        },
        UserProfile {
            id: "2".to_string(),
            name: "Sarah Chen".to_string(),
            username: "sarahc_fintech".to_string(),
            avatar: "https://i.pravatar.cc/150?img=5".to_string(),
            verified: true,
            investor_type: InvestorType::Verified,
            followers: 15700,
            following: 189,
            joined: "March 2022".to_string(),
            reputation: 94,
            bio: "VC Partner | Finance PhD | Investing in fintech innovation | Speaker & Author on market trends".to_string(),
        },
        UserProfile {
            id: "3".to_string(),
            name: "Michael Kumar".to_string(),
            username: "mikekumar".to_string(),
            avatar: "https://i.pravatar.cc/150?img=8".to_string(),
            verified: false,
            investor_type: InvestorType::Intermediate,
            followers: 3250,
            following: 512,
            joined: "October 2022".to_string(),
            reputation: 76,
            bio: "Software engineer by day, investor by night. Sharing my journey in tech stocks and cryptocurrency.".to_string(),
        },
        UserProfile {
            id: "4".to_string(),
            name: "Priya Patel".to_string(),
            username: "priya_invests".to_string(),
            avatar: "https://i.pravatar.cc/150?img=9".to_string(),
            verified: false,
            investor_type: InvestorType::Beginner,
            followers: 890,
            following: 320,
            joined: "May 2023".to_string(),
            reputation: 62,
            bio: "Beginner investor learning the ropes. Documenting my journey from savings to investments.".to_string(),
        },
        UserProfile {
            id: "5".to_string(),
            name: "Thomas Wilson".to_string(),
            username: "tom_capital".to_string(),
            avatar: "https://i.pravatar.cc/150?img=11".to_string(),
            verified: true,
            investor_type: InvestorType::Expert,
            followers: 32600,
            following: 145,
            joined: "April 2020".to_string(),
            reputation: 97,
            bio: "Hedge fund manager | Harvard MBA | Sharing insights on value investing and portfolio management".to_string(),
        },
        UserProfile {
            id: "6".to_string(),
            name: "Emma Rodriguez".to_string(),
            username: "emma_trades".to_string(),
            avatar: "https://i.pravatar.cc/150?img=16".to_string(),
            verified: false,
            investor_type: InvestorType::Intermediate,
            followers: 5340,
            following: 231,
            joined: "August 2022".to_string(),
            reputation: 84,
            bio: "Day trader turned swing investor. Focusing on renewable energy and EV sectors. Charts & technical analysis enthusiast.".to_string(),
        },
        UserProfile {
            id: "7".to_string(),
            name: "Jason Park".to_string(),
            username: "jpark_investor".to_string(),
            avatar: "https://i.pravatar.cc/150?img=12".to_string(),
            verified: true,
            investor_type: InvestorType::Expert,
            followers: 18900,
            following: 105,
            joined: "February 2021".to_string(),
            reputation: 92,
            bio: "Former Wall Street analyst | MBA from Wharton | Specializing in growth stocks and emerging markets".to_string(),
        },
        UserProfile {
            id: "8".to_string(),
            name: "Olivia Bennett".to_string(),
            username: "olivia_wealth".to_string(),
            avatar: "https://i.pravatar.cc/150?img=27".to_string(),
            verified: true,
            investor_type: InvestorType::Verified,
            followers: 28700,
            following: 175,
            joined: "December 2020".to_string(),
            reputation: 95,
            bio: "Certified Financial Planner | Wealth management expert | Helping people achieve financial freedom through smart investments".to_string(),
        },
        UserProfile {
            id: "9".to_string(),
            name: "David Kim".to_string(),
            username: "dkim_crypto".to_string(),
            avatar: "https://i.pravatar.cc/150?img=15".to_string(),
            verified: false,
            investor_type: InvestorType::Intermediate,
            followers: 7680,
            following: 420,
            joined: "June 2021".to_string(),
            reputation: 81,
            bio: "Blockchain developer and cryptocurrency investor. Exploring DeFi opportunities and NFT markets.".to_string(),
        },
        UserProfile {
            id: "10".to_string(),
            name: "Rachel Nguyen".to_string(),
            username: "rachel_reits".to_string(),
            avatar: "https://i.pravatar.cc/150?img=29".to_string(),
            verified: false,
            investor_type: InvestorType::Expert,
            followers: 11200,
            following: 253,
            joined: "September 2021".to_string(),
            reputation: 89,
            bio: "Real estate investment specialist | REIT analyst | Commercial property developer | Sharing market insights and dividend strategies".to_string(),
        },
    ]
});

/// 会话用户
///
/// 本地单用户产品形态: 所有用户撰写的帖子均以首位基线用户身份发出。
pub fn session_user() -> &'static UserProfile {
    &BASELINE_USERS[0]
}

/// 基线帖子
pub static BASELINE_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    let users = &*BASELINE_USERS;
    vec![
        Post {
            id: "1".to_string(),
            content: "Just analyzed the latest $TSLA earnings report. Impressive growth in the energy storage segment - could be a bigger revenue driver than cars in 5 years. What are your thoughts? #StockMarket #Tesla".to_string(),
            user: users[0].clone(),
            timestamp: "2 hours ago".to_string(),
            likes: 342,
            comments: 64,
            reposts: 89,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["TSLA".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "2".to_string(),
            content: "Market sentiment turning bearish on tech stocks. My analysis suggests this is a temporary correction rather than the beginning of a prolonged downturn. Adding to positions in $NVDA and $AMD. #TechStocks #Investment".to_string(),
            user: users[1].clone(),
            timestamp: "5 hours ago".to_string(),
            likes: 215,
            comments: 42,
            reposts: 31,
            is_liked: true,
            is_reposted: false,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["NVDA".to_string(), "AMD".to_string()]),
            image: Some("https://images.unsplash.com/photo-1590283603385-17ffb3a7f29f?q=80&w=2070&auto=format&fit=crop".to_string()),
            poll: None,
        },
        Post {
            id: "3".to_string(),
            content: "Started my real estate investment journey today! Invested in my first REIT $VNQ. Low barrier to entry compared to direct property ownership, plus diversification benefits. #RealEstateInvesting #REIT".to_string(),
            user: users[3].clone(),
            timestamp: "8 hours ago".to_string(),
            likes: 89,
            comments: 25,
            reposts: 5,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: Some(vec!["VNQ".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "4".to_string(),
            content: "Which sector do you think will outperform in the next 12 months?".to_string(),
            user: users[4].clone(),
            timestamp: "1 day ago".to_string(),
            likes: 176,
            comments: 38,
            reposts: 14,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: None,
            image: None,
            poll: Some(Poll {
                options: vec![
                    PollOption { text: "Technology".to_string(), votes: 432 },
                    PollOption { text: "Healthcare".to_string(), votes: 287 },
                    PollOption { text: "Energy".to_string(), votes: 145 },
                    PollOption { text: "Financials".to_string(), votes: 198 },
                ],
                total_votes: 1062,
                ends_at: "in 2 days".to_string(),
            }),
        },
        Post {
            id: "5".to_string(),
            content: "Warning: Seeing major selling pressure on $JPM and other banking stocks. Q2 earnings miss and increased loan loss provisions signal potential trouble ahead. #Banking #StockMarket".to_string(),
            user: users[2].clone(),
            timestamp: "1 day ago".to_string(),
            likes: 112,
            comments: 45,
            reposts: 28,
            is_liked: false,
            is_reposted: true,
            sentiment: Sentiment::Bearish,
            tickers: Some(vec!["JPM".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "6".to_string(),
            content: "Gold continuing its upward trend as a safe haven amid market volatility. My position in $GLD up 8% this month alone. Consider allocating 5-10% of your portfolio to precious metals as a hedge. #GoldInvesting #PortfolioDiversification".to_string(),
            user: users[0].clone(),
            timestamp: "2 days ago".to_string(),
            likes: 267,
            comments: 42,
            reposts: 76,
            is_liked: true,
            is_reposted: false,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["GLD".to_string()]),
            image: Some("https://images.unsplash.com/photo-1610375461246-83df859d849d?q=80&w=2070&auto=format&fit=crop".to_string()),
            poll: None,
        },
        Post {
            id: "7".to_string(),
            content: "Just completed my quarterly portfolio rebalancing. Increased allocation to $GOOG and $MSFT while trimming some $AMZN after the recent run-up. Keeping cash reserves for potential market dips. #PortfolioManagement #StockPicks".to_string(),
            user: users[6].clone(),
            timestamp: "3 hours ago".to_string(),
            likes: 187,
            comments: 42,
            reposts: 23,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: Some(vec!["GOOG".to_string(), "MSFT".to_string(), "AMZN".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "8".to_string(),
            content: "The yield curve is signaling potential economic slowdown. Looking at defensive sectors like utilities and consumer staples for the next quarter. What are your safe-haven picks? $XLU $XLP #BondMarket #RiskManagement".to_string(),
            user: users[7].clone(),
            timestamp: "6 hours ago".to_string(),
            likes: 204,
            comments: 58,
            reposts: 41,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Bearish,
            tickers: Some(vec!["XLU".to_string(), "XLP".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "9".to_string(),
            content: "Ethereum merge is around the corner! This shift to proof-of-stake will reduce energy consumption by ~99.95%. Extremely bullish on $ETH long-term prospects. #Crypto #Ethereum #ESGInvesting".to_string(),
            user: users[8].clone(),
            timestamp: "1 day ago".to_string(),
            likes: 312,
            comments: 76,
            reposts: 94,
            is_liked: true,
            is_reposted: false,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["ETH".to_string()]),
            image: Some("https://images.unsplash.com/photo-1639762681057-408e52192e55?q=80&w=2070&auto=format&fit=crop".to_string()),
            poll: None,
        },
        Post {
            id: "10".to_string(),
            content: "Planning to diversify my portfolio with more alternative investments. Considering allocating 5% to commodities and 5% to REITs. What are your favorite tickers in these sectors? #Diversification #InvestmentStrategy".to_string(),
            user: users[5].clone(),
            timestamp: "7 hours ago".to_string(),
            likes: 156,
            comments: 87,
            reposts: 19,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: Some(Vec::new()),
            image: None,
            poll: None,
        },
        Post {
            id: "11".to_string(),
            content: "Fed minutes release tomorrow could signal a more hawkish stance. Market is pricing in another 75 bps hike. Be cautious with high-growth stocks in the near term. $SPY $QQQ #FederalReserve #InterestRates".to_string(),
            user: users[1].clone(),
            timestamp: "5 hours ago".to_string(),
            likes: 243,
            comments: 56,
            reposts: 38,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Bearish,
            tickers: Some(vec!["SPY".to_string(), "QQQ".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "12".to_string(),
            content: "My top 3 dividend aristocrats for consistent income: $JNJ, $PG, and $KO. All have increased dividends for 50+ consecutive years. Perfect for retirement portfolios. What are your favorite dividend stocks? #DividendInvesting #PassiveIncome".to_string(),
            user: users[4].clone(),
            timestamp: "1 day ago".to_string(),
            likes: 276,
            comments: 62,
            reposts: 47,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["JNJ".to_string(), "PG".to_string(), "KO".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "13".to_string(),
            content: "Considering investing in data center REITs like $EQIX and $DLR. The growth of cloud computing and AI should drive demand for years to come. Any opinions? #REITs #TechInvesting".to_string(),
            user: users[9].clone(),
            timestamp: "9 hours ago".to_string(),
            likes: 152,
            comments: 34,
            reposts: 12,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["EQIX".to_string(), "DLR".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "14".to_string(),
            content: "Dollar cost averaging into $BTC and $ETH has been my strategy for the past 2 years. Despite volatility, I'm up 78% overall. Patience is key in crypto investing. #Cryptocurrency #DollarCostAveraging".to_string(),
            user: users[8].clone(),
            timestamp: "3 days ago".to_string(),
            likes: 345,
            comments: 87,
            reposts: 65,
            is_liked: true,
            is_reposted: true,
            sentiment: Sentiment::Bullish,
            tickers: Some(vec!["BTC".to_string(), "ETH".to_string()]),
            image: None,
            poll: None,
        },
        Post {
            id: "15".to_string(),
            content: "China's latest policy shifts could present buying opportunities in their tech sector. Looking at $BABA and $JD after the recent sell-off. High risk, but potential high reward play. #EmergingMarkets #ChineseStocks".to_string(),
            user: users[6].clone(),
            timestamp: "2 days ago".to_string(),
            likes: 198,
            comments: 76,
            reposts: 23,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: Some(vec!["BABA".to_string(), "JD".to_string()]),
            image: Some("https://images.unsplash.com/photo-1614028674026-a65e31bfd27c?q=80&w=2070&auto=format&fit=crop".to_string()),
            poll: None,
        },
        Post {
            id: "16".to_string(),
            content: "What's your investment time horizon?".to_string(),
            user: users[7].clone(),
            timestamp: "4 days ago".to_string(),
            likes: 287,
            comments: 134,
            reposts: 42,
            is_liked: false,
            is_reposted: false,
            sentiment: Sentiment::Neutral,
            tickers: None,
            image: None,
            poll: Some(Poll {
                options: vec![
                    PollOption { text: "Short-term (< 1 year)".to_string(), votes: 243 },
                    PollOption { text: "Medium-term (1-5 years)".to_string(), votes: 567 },
                    PollOption { text: "Long-term (5-10 years)".to_string(), votes: 789 },
                    PollOption { text: "Very long-term (10+ years)".to_string(), votes: 432 },
                ],
                total_votes: 2031,
                ends_at: "ended".to_string(),
            }),
        },
    ]
});

/// 热门话题
pub static TRENDING_TOPICS: Lazy<Vec<TrendingTopic>> = Lazy::new(|| {
    vec![
        TrendingTopic {
            id: "1".to_string(),
            name: "AI Stocks".to_string(),
            posts: 24800,
            sentiment: Sentiment::Bullish,
            change: Some(12.4),
        },
        TrendingTopic {
            id: "2".to_string(),
            name: "Federal Reserve".to_string(),
            posts: 18600,
            sentiment: Sentiment::Neutral,
            change: None,
        },
        TrendingTopic {
            id: "3".to_string(),
            name: "Semiconductor Shortage".to_string(),
            posts: 12400,
            sentiment: Sentiment::Bearish,
            change: Some(-3.8),
        },
        TrendingTopic {
            id: "4".to_string(),
            name: "ESG Investing".to_string(),
            posts: 9800,
            sentiment: Sentiment::Bullish,
            change: Some(5.2),
        },
        TrendingTopic {
            id: "5".to_string(),
            name: "Digital Banking".to_string(),
            posts: 7400,
            sentiment: Sentiment::Bullish,
            change: Some(2.3),
        },
    ]
});

/// 市场指数行情
pub static MARKET_DATA: Lazy<Vec<MarketIndex>> = Lazy::new(|| {
    vec![
        MarketIndex {
            index: "S&P 500".to_string(),
            price: 4892.75,
            change: 45.23,
            change_percent: 0.93,
        },
        MarketIndex {
            index: "NASDAQ".to_string(),
            price: 17468.30,
            change: 284.11,
            change_percent: 1.65,
        },
        MarketIndex {
            index: "DOW JONES".to_string(),
            price: 38996.40,
            change: -34.82,
            change_percent: -0.09,
        },
        MarketIndex {
            index: "RUSSELL 2000".to_string(),
            price: 2065.59,
            change: 8.42,
            change_percent: 0.41,
        },
    ]
});
