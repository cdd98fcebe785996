//! CSS and inline JS for the portfolio page.
//!
//! This module contains the complete CSS for the generated site and the
//! small inline script that progressively swaps client-target section
//! fragments into their slots.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use section_leptos::styles::SITE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! ```

/// Complete CSS for the portfolio page - CRT-inspired dark theme.
///
/// Covers:
/// - Base typography and spacing (monospace)
/// - Hero + section layouts
/// - Skeleton placeholder shimmer
/// - Error fallback panel
/// - Project cards, skills grid, experience timeline, contact channels
pub const SITE_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --bg-dark: #0a0a0a;
    --bg-mid: #141414;
    --text-bright: #d6d6d6;
    --text-dim: #707070;
    --accent: #7ee787;
    --accent-dim: #2ea043;
    --danger: #e5534b;
    --border: #262626;
    --radius: 8px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg-black);
    color: var(--text-bright);
    font-family: "JetBrains Mono", ui-monospace, SFMono-Regular, Menlo, monospace;
    font-size: 15px;
    line-height: 1.6;
}

a { color: var(--accent); text-decoration: none; }
a:hover { text-decoration: underline; }

.page { max-width: 960px; margin: 0 auto; padding: 0 24px 96px; }

.slot { display: block; margin: 72px 0; min-height: 120px; }

/* Hero */
.hero { padding: 96px 0 24px; }
.hero-name { font-size: 2.4rem; margin: 0 0 8px; color: var(--accent); }
.hero-headline { font-size: 1.2rem; margin: 0 0 16px; }
.hero-tagline { color: var(--text-dim); max-width: 640px; margin: 0 0 16px; }
.hero-meta { color: var(--text-dim); font-size: 0.85rem; }
.hero-actions { margin-top: 24px; display: flex; gap: 12px; }
.hero-actions a {
    border: 1px solid var(--accent-dim);
    border-radius: var(--radius);
    padding: 8px 16px;
}

/* Section headers (shared) */
.section-eyebrow {
    color: var(--accent);
    font-size: 0.8rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    margin: 0 0 4px;
}
.section-title { font-size: 1.6rem; margin: 0 0 16px; }

/* About */
.about-text p { margin: 0 0 12px; max-width: 680px; }
.about-highlights { list-style: none; padding: 0; margin: 16px 0 0; }
.about-highlights li { padding-left: 18px; position: relative; }
.about-highlights li::before { content: "\003E"; position: absolute; left: 0; color: var(--accent); }

/* Projects */
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }
.project-card {
    background: var(--bg-dark);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 20px;
}
.project-card.featured { grid-column: 1 / -1; border-color: var(--accent-dim); }
.project-name { margin: 0 0 8px; font-size: 1.1rem; }
.project-desc { color: var(--text-dim); margin: 0 0 12px; }
.project-tags { display: flex; flex-wrap: wrap; gap: 6px; margin: 0 0 12px; }
.project-tags span {
    background: var(--bg-mid);
    border-radius: 4px;
    padding: 2px 8px;
    font-size: 0.75rem;
    color: var(--text-dim);
}
.project-links { display: flex; gap: 16px; font-size: 0.85rem; }

/* Skills */
.skills-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px; }
.skill-group { background: var(--bg-dark); border: 1px solid var(--border); border-radius: var(--radius); padding: 16px 20px; }
.skill-group h3 { margin: 0 0 12px; font-size: 0.95rem; display: flex; align-items: center; gap: 8px; }
.skill-group ul { list-style: none; padding: 0; margin: 0; color: var(--text-dim); }
.skill-group li { padding: 2px 0; }

/* Experience */
.timeline { border-left: 1px solid var(--border); padding-left: 24px; }
.timeline-entry { position: relative; margin-bottom: 40px; }
.timeline-entry::before {
    content: "";
    position: absolute;
    left: -29px;
    top: 6px;
    width: 9px;
    height: 9px;
    border-radius: 50%;
    background: var(--accent-dim);
}
.timeline-role { margin: 0; font-size: 1.05rem; }
.timeline-meta { color: var(--text-dim); font-size: 0.85rem; margin: 2px 0 8px; }
.timeline-achievements { color: var(--text-dim); margin: 8px 0 0; padding-left: 20px; }

/* Contact */
.contact-email {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    background: var(--bg-dark);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 10px 16px;
    margin: 8px 0 16px;
}
.copy-btn {
    background: var(--bg-mid);
    color: var(--text-bright);
    border: 1px solid var(--border);
    border-radius: 4px;
    padding: 4px 10px;
    font: inherit;
    font-size: 0.75rem;
    cursor: pointer;
}
.copy-btn:hover { border-color: var(--accent-dim); }
.contact-channels { list-style: none; padding: 0; margin: 0; display: flex; flex-wrap: wrap; gap: 16px; }
.contact-channels a { font-size: 0.9rem; }
.contact-note { color: var(--text-dim); max-width: 560px; }

/* Skeleton placeholders */
.skeleton { animation: skeleton-pulse 1.4s ease-in-out infinite; }
.skeleton-line, .skeleton-block {
    background: var(--bg-mid);
    border-radius: 4px;
    margin-bottom: 10px;
}
.skeleton-line { height: 14px; }
.skeleton-line.wide { width: 85%; }
.skeleton-line.mid { width: 60%; }
.skeleton-line.narrow { width: 35%; }
.skeleton-block { height: 120px; }
.skeleton-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }
@keyframes skeleton-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.45; }
}

/* Error fallback panel */
.error-fallback {
    background: var(--bg-dark);
    border: 1px solid var(--danger);
    border-radius: var(--radius);
    padding: 32px;
    text-align: center;
}
.error-fallback .fallback-icon { font-size: 2rem; color: var(--danger); }
.error-fallback h2 { margin: 12px 0 8px; }
.error-fallback p { color: var(--text-dim); margin: 0 0 20px; }
.retry-btn {
    background: var(--bg-mid);
    color: var(--text-bright);
    border: 1px solid var(--danger);
    border-radius: var(--radius);
    padding: 8px 20px;
    font: inherit;
    cursor: pointer;
}
.retry-btn:hover { background: var(--bg-dark); }
"#;

/// Inline script that fetches client-target section fragments and swaps
/// them into their slots. A fetch failure replaces the skeleton with the
/// fallback panel; its "Try again" button re-invokes the fetch.
pub const SECTION_LOADER_JS: &str = r#"
(function () {
  "use strict";

  var FALLBACK =
    '<div class="error-fallback">' +
    '<div class="fallback-icon" aria-hidden="true">&#9888;</div>' +
    '<h2>Something went wrong</h2>' +
    '<p>This section failed to load. The rest of the page is unaffected.</p>' +
    '<button class="retry-btn" type="button">Try again</button>' +
    '</div>';

  function load(slot) {
    var src = slot.getAttribute("data-slot-src");
    if (!src) return;
    fetch(src)
      .then(function (res) {
        if (!res.ok) throw new Error("HTTP " + res.status);
        return res.text();
      })
      .then(function (html) {
        slot.innerHTML = html;
        slot.removeAttribute("data-slot-src");
      })
      .catch(function () {
        slot.innerHTML = FALLBACK;
        slot.querySelector(".retry-btn").addEventListener("click", function () {
          load(slot);
        });
      });
  }

  document.querySelectorAll("[data-slot-src]").forEach(load);

  document.addEventListener("click", function (ev) {
    var btn = ev.target.closest(".copy-btn");
    if (btn && btn.dataset.copy && navigator.clipboard) {
      navigator.clipboard.writeText(btn.dataset.copy);
      btn.textContent = "Copied";
      setTimeout(function () { btn.textContent = "Copy"; }, 2000);
    }
  });
})();
"#;
