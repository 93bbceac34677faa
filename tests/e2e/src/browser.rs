use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window width used for desktop layouts (at or above the 1024px breakpoint).
pub const DESKTOP: (u32, u32) = (1280, 900);
/// Window width used for the collapsed mobile menu.
pub const MOBILE: (u32, u32) = (390, 844);

const POLL_TIMEOUT: Duration = Duration::from_secs(5);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        Self::launch_with_size(DESKTOP)
    }

    pub fn launch_with_size(size: (u32, u32)) -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some(size))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    /// Navigate and wait until the client has hydrated, so clicks are handled.
    pub fn goto_ready(&self, url: &str) -> Result<()> {
        self.goto(url)?;
        self.tab
            .wait_for_element_with_custom_timeout(crate::READY_HEADER, Duration::from_secs(30))?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    /// Inner text of every element matching `selector`, in document order.
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let mut texts = Vec::new();
        for element in self.tab.find_elements(selector).unwrap_or_default() {
            texts.push(element.get_inner_text()?.trim().to_string());
        }
        Ok(texts)
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    pub fn count(&self, selector: &str) -> usize {
        self.tab
            .find_elements(selector)
            .map(|elements| elements.len())
            .unwrap_or(0)
    }

    /// Poll until exactly `expected` elements match `selector`.
    pub fn wait_for_count(&self, selector: &str, expected: usize) -> Result<()> {
        let started = Instant::now();
        loop {
            let found = self.count(selector);
            if found == expected {
                return Ok(());
            }
            if started.elapsed() > POLL_TIMEOUT {
                anyhow::bail!("expected {expected} match(es) for {selector}, found {found}");
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Evaluate a JS expression that yields a string.
    pub fn eval_string(&self, expression: &str) -> Result<Option<String>> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(match result.value {
            Some(serde_json::Value::String(text)) => Some(text),
            _ => None,
        })
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }
}
