//! The static list of polled feed endpoints.
//!
//! Order matters: sources earlier in the list get first claim on the per-run
//! item cap.

pub const TECH_NEWS_FEEDS: &[&str] = &[
    // General tech press
    "https://techcrunch.com/feed/",
    "https://www.theverge.com/rss/index.xml",
    "https://www.wired.com/feed/rss",
    "https://www.techmeme.com/feed.xml",
    "https://news.ycombinator.com/rss",
    "https://feeds.arstechnica.com/arstechnica/index",
    "https://www.engadget.com/rss.xml",
    "https://mashable.com/feeds/rss/technology",
    "https://www.cnet.com/rss/news/",
    "https://www.zdnet.com/news/rss.xml",
    "https://gizmodo.com/rss",
    "https://www.digitaltrends.com/feed/",
    "https://www.androidauthority.com/feed/",
    "https://9to5mac.com/feed/",
    "https://9to5google.com/feed/",
    "https://venturebeat.com/feed/",
    "https://www.techradar.com/rss",
    "https://www.technologyreview.com/feed/",
    "https://futurism.com/feed",
    "https://www.nasa.gov/rss/dyn/breaking_news.rss",
    // Community aggregators
    "https://www.reddit.com/r/technology/.rss",
    "https://lobste.rs/rss",
    // AI & research
    "https://openai.com/blog/rss",
    "https://ai.googleblog.com/feeds/posts/default?alt=rss",
    "https://deepmind.com/blog/rss.xml",
    "https://www.csail.mit.edu/rss.xml",
    "https://venturebeat.com/category/ai/feed/",
    // Security
    "https://krebsonsecurity.com/feed/",
    "https://feeds.feedburner.com/TheHackersNews",
    "https://www.darkreading.com/rss.xml",
    "https://www.bleepingcomputer.com/feed/",
    // Cloud & data
    "https://aws.amazon.com/blogs/aws/feed/",
    "https://cloud.google.com/blog/topics/rss",
    "https://techcommunity.microsoft.com/gxcuf89792/rss/board?board.id=AzureBlog",
    "https://devops.com/feed/",
    "https://towardsdatascience.com/feed",
    "https://www.kdnuggets.com/feed",
    "https://analyticsindiamag.com/feed/",
];
