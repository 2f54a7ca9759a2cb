pub const APPLICATION_NAME: &str = "Camp Search - Desktop";
pub const APPLICATION_TITLE: &str = "Camp Search";
pub const CONFIG_DIRECTORY_NAME: &str = "camp-search-pc";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DEFAULT_BACKEND_BASE_URL: &str = "http://127.0.0.1:5000";
pub const SEARCH_ENDPOINT_PATH: &str = "/search";
pub const SEARCH_QUERY_PARAMETER: &str = "q";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CONTROLLER: &str = "[CONTROLLER]";
pub const LOG_TAG_HTTP_BACKEND: &str = "[HTTP_BACKEND]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_SEARCH_VIEW: &str = "[SEARCH_VIEW]";
pub const LOG_TAG_RESULT_BLOCK: &str = "[RESULT_BLOCK]";

pub const USER_MESSAGE_EMPTY_QUERY: &str = "Silakan masukkan kata kunci pencarian!";
pub const USER_MESSAGE_NO_RESULTS: &str = "Maaf, tidak ditemukan tempat kemah yang cocok.";
pub const USER_MESSAGE_SEARCH_FAILED: &str =
    "Terjadi kesalahan saat mencari. Silakan coba lagi.";
pub const USER_MESSAGE_LOADING: &str = "Mencari tempat kemah...";

pub const SEARCH_INPUT_PLACEHOLDER: &str =
    "Masukkan kata kunci (misal: 'kamar mandi bersih', 'sejuk di jogja')";
pub const SEARCH_BUTTON_LABEL: &str = "Cari";

pub const LABEL_LOCATION: &str = "📍 Lokasi";
pub const LABEL_RATING: &str = "⭐ Rating Rata-rata";
pub const LABEL_SCORE: &str = "📊 Skor Relevansi";
pub const LABEL_MAP_LINK: &str = "🗺 Buka di peta";

pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const SPINNER_TICK_MILLIS: u64 = 80;
