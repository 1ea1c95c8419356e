//! End-to-end scrape through the public library API, with the network
//! replaced by in-memory fakes.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use animirror::error::{ScrapeError, ScrapeResult};
use animirror::scrapers::{
    AnimeScraper, FetchOptions, MirrorResolver, MirrorSet, PageFetcher, Prober,
};

const PRIMARY: &str = "https://aniwatchtv.example";
const CLONE_A: &str = "https://hianime.example";
const CLONE_B: &str = "https://hianime2.example";

const DETAIL_HTML: &str = r#"<!DOCTYPE html><html><head><title>Frieren</title></head><body>
<script type="application/json" id="syncData">{"page":"anime","anime_id":"18542","mal_id":52991,"anilist_id":"154587"}</script>
<div id="ani_detail"><div class="container"><div class="anis-content">
  <div class="anisc-poster"><div class="film-poster">
    <img src="https://cdn.example/frieren.jpg" class="film-poster-img" alt="Frieren">
  </div></div>
  <div class="anisc-detail">
    <h2 class="film-name dynamic-name" data-jname="Sousou no Frieren">Frieren: Beyond Journey's End</h2>
    <div class="film-stats">
      <div class="tick">
        <div class="tick-item tick-pg">PG-13</div>
        <div class="tick-item tick-quality">HD</div>
        <div class="tick-item tick-sub">28</div>
        <div class="tick-item tick-eps">28</div>
        <span class="dot"></span>
        <span class="item">TV</span>
        <span class="dot"></span>
        <span class="item">24m</span>
      </div>
    </div>
    <div class="film-buttons">
      <a href="/watch/frieren-beyond-journeys-end-18542" class="btn btn-radius btn-primary btn-play">Watch now</a>
    </div>
    <div class="film-description m-hide">
      <div class="text">The adventure is over but life goes on for an elf mage.</div>
    </div>
  </div>
  <div class="anisc-info-wrap"><div class="anisc-info">
    <div class="item item-title w-hide"><span class="item-head">Overview:</span><div class="text">Long text</div></div>
    <div class="item item-title"><span class="item-head">Japanese:</span> <span class="name">葬送のフリーレン</span></div>
    <div class="item item-title"><span class="item-head">Premiered:</span> <span class="name">Fall 2023</span></div>
    <div class="item item-title"><span class="item-head">MAL Score:</span> <span class="name">9.3</span></div>
    <div class="item item-list">
      <span class="item-head">Genres:</span>
      <a href="/genre/adventure">Adventure</a>
      <a href="/genre/drama">Drama</a>
      <a href="/genre/fantasy">Fantasy</a>
    </div>
    <div class="item item-title">
      <span class="item-head">Producers:</span>
      <a class="name" href="/producer/aniplex">Aniplex</a>,
      <a class="name" href="/producer/dentsu">Dentsu</a>
    </div>
  </div></div>
</div></div></div>
</body></html>"#;

const EPISODE_FRAGMENT: &str = r#"<div class="detail-infor-content"><div class="ss-list">
<a title="The Journey's End" class="ssl-item ep-item" data-number="1" data-id="100001" href="/watch/frieren-beyond-journeys-end-18542?ep=100001">1</a>
<a title="It Didn't Have to Be Magic..." class="ssl-item ep-item" data-number="2" data-id="100002" href="/watch/frieren-beyond-journeys-end-18542?ep=100002">2</a>
<a title="Recap" class="ssl-item ep-item ssl-item-filler" data-number="x" data-id="100003">3</a>
</div></div>"#;

/// Reports only the listed URLs as reachable and records every probe.
struct ScriptedProber {
    up: Mutex<HashSet<String>>,
    probed: Mutex<Vec<String>>,
}

impl ScriptedProber {
    fn new(up: &[&str]) -> Self {
        let prober = Self {
            up: Mutex::new(HashSet::new()),
            probed: Mutex::new(Vec::new()),
        };
        prober.set_up(up);
        prober
    }

    fn set_up(&self, up: &[&str]) {
        *self.up.lock().unwrap() = up.iter().map(|u| u.to_string()).collect();
    }
}

#[async_trait]
impl Prober for ScriptedProber {
    async fn probe(&self, url: &str) -> bool {
        self.probed.lock().unwrap().push(url.to_string());
        self.up.lock().unwrap().contains(url)
    }
}

/// Serves fixtures by URL and records the options each request carried.
struct FixtureSite {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<(String, FetchOptions)>>,
}

impl FixtureSite {
    fn for_base(base: &str) -> Self {
        let envelope = serde_json::json!({ "status": true, "html": EPISODE_FRAGMENT }).to_string();
        let pages = HashMap::from([
            (
                format!("{}/frieren-beyond-journeys-end-18542", base),
                DETAIL_HTML.to_string(),
            ),
            (format!("{}/ajax/v2/episode/list/18542", base), envelope),
        ]);
        Self {
            pages,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PageFetcher for FixtureSite {
    async fn fetch(&self, url: &str, options: &FetchOptions) -> ScrapeResult<String> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_string(), options.clone()));
        self.pages.get(url).cloned().ok_or(ScrapeError::Transport {
            status: 404,
            message: "Not Found".to_string(),
        })
    }
}

fn build_scraper(prober: Arc<ScriptedProber>, site: Arc<FixtureSite>) -> AnimeScraper {
    let mirrors = MirrorSet::new([PRIMARY, CLONE_A, CLONE_B]).unwrap();
    AnimeScraper::new(Arc::new(MirrorResolver::new(mirrors, prober)), site)
}

#[tokio::test]
async fn scrapes_from_first_reachable_clone() {
    let prober = Arc::new(ScriptedProber::new(&[CLONE_A, CLONE_B]));
    let site = Arc::new(FixtureSite::for_base(CLONE_A));
    let scraper = build_scraper(prober.clone(), site.clone());

    let response = scraper
        .fetch_about("frieren-beyond-journeys-end-18542")
        .await
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    // Probing stops at the first live candidate.
    assert_eq!(*prober.probed.lock().unwrap(), vec![PRIMARY, CLONE_A]);
    assert_eq!(scraper.resolver().effective_base().await, CLONE_A);

    assert_eq!(json["id"], 18542);
    assert_eq!(json["mal_id"], 52991);
    assert_eq!(json["al_id"], 154587);
    assert_eq!(json["title"], "Frieren: Beyond Journey's End");
    assert_eq!(json["image"], "https://cdn.example/frieren.jpg");
    assert_eq!(json["rating"], "PG-13");
    assert_eq!(json["quality"], "HD");
    assert_eq!(json["category"], "TV");
    assert_eq!(json["sub_episodes"], 28);
    assert!(json["dub_episodes"].is_null());
    assert_eq!(json["sub_or_dub"], "sub");
    assert_eq!(json["japanese_title"], "葬送のフリーレン");
    assert_eq!(json["premiered"], "Fall 2023");
    assert_eq!(json["mal_score"], "9.3");
    assert_eq!(json["genres"], "Adventure,Drama,Fantasy");
    assert_eq!(json["producers"], "Aniplex,Dentsu");
    assert!(json.get("overview").is_none());

    let episodes = json["episodes"].as_array().unwrap();
    assert_eq!(episodes.len(), 3);
    assert_eq!(
        episodes[0]["id"],
        "frieren-beyond-journeys-end-18542$episode$100001$sub"
    );
    assert_eq!(episodes[1]["episode_no"], 2);
    assert_eq!(episodes[2]["is_filler"], true);
    assert!(episodes[2]["episode_no"].is_null());
    assert!(episodes[2]["id"].is_null());
}

#[tokio::test]
async fn episode_request_looks_like_an_in_page_call() {
    let prober = Arc::new(ScriptedProber::new(&[PRIMARY]));
    let site = Arc::new(FixtureSite::for_base(PRIMARY));
    let scraper = build_scraper(prober, site.clone());

    scraper
        .fetch_about("frieren-beyond-journeys-end-18542")
        .await
        .unwrap();

    let requests = site.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);

    let (_, ajax) = requests
        .iter()
        .find(|(url, _)| url.contains("/ajax/"))
        .unwrap();
    assert!(ajax.ajax);
    assert_eq!(
        ajax.referer.as_deref(),
        Some("https://aniwatchtv.example/watch/frieren-beyond-journeys-end-18542")
    );

    let (_, page) = requests
        .iter()
        .find(|(url, _)| !url.contains("/ajax/"))
        .unwrap();
    assert_eq!(*page, FetchOptions::page());
}

#[tokio::test]
async fn all_mirrors_down_surfaces_the_fetch_error() {
    let prober = Arc::new(ScriptedProber::new(&[]));
    // The site answers nothing under the primary, so the real fetch fails.
    let site = Arc::new(FixtureSite::for_base(CLONE_B));
    let scraper = build_scraper(prober.clone(), site.clone());

    let err = scraper
        .fetch_about("frieren-beyond-journeys-end-18542")
        .await
        .unwrap_err();

    assert_eq!(prober.probed.lock().unwrap().len(), 3);
    assert_eq!(scraper.resolver().effective_base().await, PRIMARY);
    assert_eq!(err.status(), 404);
    assert_eq!(err.public_message(), "Not Found");
    assert!(site
        .requests
        .lock()
        .unwrap()
        .iter()
        .all(|(url, _)| url.starts_with(PRIMARY)));
}

#[tokio::test]
async fn recovered_primary_is_preferred_again() {
    let prober = Arc::new(ScriptedProber::new(&[CLONE_B]));
    let mirrors = MirrorSet::new([PRIMARY, CLONE_A, CLONE_B]).unwrap();
    let resolver = MirrorResolver::new(mirrors, prober.clone());
    assert_eq!(resolver.resolve().await.base, CLONE_B);

    prober.set_up(&[PRIMARY, CLONE_B]);
    assert_eq!(resolver.resolve().await.base, PRIMARY);
    assert_eq!(resolver.effective_base().await, PRIMARY);

    prober.set_up(&[]);
    assert_eq!(resolver.resolve().await.base, PRIMARY);
}

#[tokio::test]
async fn malformed_episode_envelope_is_an_extraction_error() {
    let prober = Arc::new(ScriptedProber::new(&[PRIMARY]));
    let mut site = FixtureSite::for_base(PRIMARY);
    site.pages.insert(
        format!("{}/ajax/v2/episode/list/18542", PRIMARY),
        "<html>challenge page</html>".to_string(),
    );
    let scraper = build_scraper(prober, Arc::new(site));

    let err = scraper
        .fetch_about("frieren-beyond-journeys-end-18542")
        .await
        .unwrap_err();
    assert!(matches!(err, ScrapeError::Extraction(_)));
    assert_eq!(err.status(), 500);
    assert_eq!(err.public_message(), "Internal server error");
}
