// checking validity of the long url
pub fn valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}
