pub const COMMUNITY_MIRRORS_URL: &str = "https://ziglang.org/download/community-mirrors.txt";

pub fn parse_mirror_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("https://"))
        .map(|line| line.trim_end_matches('/').to_string())
        .collect()
}
