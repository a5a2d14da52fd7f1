use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 帖子 ID
pub type PostId = u64;

/// 回退数据的条数
pub const FALLBACK_COUNT: u64 = 20;

/// 卡片配图 (按帖子 ID 取模选择)
const IMAGE_SEEDS: [&str; 6] = [
    "https://images.unsplash.com/photo-1506748686214-e9df14d4d9d0?w=400&q=60",
    "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=400&q=60",
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400&q=60",
    "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400&q=60",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=400&q=60",
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&q=60",
];

/// 帖子 (不可变记录)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId", default)]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, user_id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// 卡片配图 URL
    pub fn image_url(&self) -> &'static str {
        image_for(self.id)
    }
}

/// 根据帖子 ID 选择配图，总能返回一个值
pub fn image_for(id: PostId) -> &'static str {
    IMAGE_SEEDS[(id % IMAGE_SEEDS.len() as u64) as usize]
}

/// 获取失败时使用的固定回退数据
pub fn fallback_posts() -> Vec<Post> {
    (1..=FALLBACK_COUNT)
        .map(|i| {
            Post::new(
                i,
                1,
                format!("Post title number {}", i),
                format!(
                    "This is the body of post {}. It contains some placeholder text to fill the card.",
                    i
                ),
            )
        })
        .collect()
}

/// 卡片上显示的固定日期
pub fn card_date() -> String {
    NaiveDate::from_ymd_opt(2020, 12, 21)
        .and_then(|d| d.and_hms_opt(14, 57, 0))
        .as_ref()
        .map(format_card_date)
        .unwrap_or_default()
}

fn format_card_date(dt: &NaiveDateTime) -> String {
    dt.format("%a, %d %b %Y %H:%M GMT").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_twenty_sequential_posts() {
        let posts = fallback_posts();
        assert_eq!(posts.len(), 20);
        for (i, post) in posts.iter().enumerate() {
            let n = i as u64 + 1;
            assert_eq!(post.id, n);
            assert_eq!(post.user_id, 1);
            assert_eq!(post.title, format!("Post title number {}", n));
            assert!(post.body.starts_with(&format!("This is the body of post {}.", n)));
        }
    }

    #[test]
    fn fallback_is_deterministic() {
        assert_eq!(fallback_posts(), fallback_posts());
    }

    #[test]
    fn image_lookup_wraps_by_six() {
        assert_eq!(image_for(0), IMAGE_SEEDS[0]);
        assert_eq!(image_for(5), IMAGE_SEEDS[5]);
        assert_eq!(image_for(6), image_for(0));
        assert_eq!(image_for(13), image_for(1));
    }

    #[test]
    fn card_date_matches_fixed_text() {
        assert_eq!(card_date(), "Mon, 21 Dec 2020 14:57 GMT");
    }

    #[test]
    fn deserialize_without_user_id() {
        let post: Post = serde_json::from_str(r#"{"id": 3, "title": "t", "body": "b"}"#).unwrap();
        assert_eq!(post, Post::new(3, 0, "t", "b"));
    }
}
