use e2e::browser::{Browser, MOBILE};
use e2e::test_server::TestServer;
use e2e::NAV_PATHS;

#[tokio::test]
#[ignore = "needs Chrome and a running web build"]
async fn test_toggle_flips_menu_once_per_click() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch_with_size(MOBILE).expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");

    page.goto_ready(server.url()).expect("Failed to load page");
    assert_eq!(page.count(".mobile_nav"), 0, "menu starts closed");

    for expected_open in [true, false, true, false] {
        page.click(".menu_toggle").expect("Failed to click toggle");
        page.wait_for_count(".mobile_nav", usize::from(expected_open))
            .expect("menu visibility should follow the toggle");
        assert_eq!(
            page.attribute(".menu_toggle", "aria-expanded")
                .expect("attr")
                .as_deref(),
            Some(if expected_open { "true" } else { "false" })
        );
    }
}

#[tokio::test]
#[ignore = "needs Chrome and a running web build"]
async fn test_mobile_link_closes_menu_and_navigates() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch_with_size(MOBILE).expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");

    page.goto_ready(server.url()).expect("Failed to load page");
    page.click(".menu_toggle").expect("Failed to open menu");
    page.wait_for_count(".mobile_link", NAV_PATHS.len())
        .expect("all links in the mobile menu");
    assert_eq!(page.count(".mobile_link.active"), 1);

    page.click(r#".mobile_link[href="/projects"]"#)
        .expect("Failed to click link");
    page.wait_for_count(".mobile_nav", 0)
        .expect("menu should close after navigation");
    assert!(page.url().expect("url").ends_with("/projects"));

    page.click(".menu_toggle").expect("Failed to reopen menu");
    page.wait_for_count(r#".mobile_link.active[href="/projects"]"#, 1)
        .expect("new route should be active in the mobile menu");
}

#[tokio::test]
#[ignore = "needs Chrome and a running web build"]
async fn test_desktop_controls_hidden_on_mobile() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch_with_size(MOBILE).expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");

    page.goto_ready(server.url()).expect("Failed to load page");
    let display = page
        .eval_string(r#"getComputedStyle(document.querySelector(".desktop_nav")).display"#)
        .expect("eval");
    assert_eq!(display.as_deref(), Some("none"));
}
