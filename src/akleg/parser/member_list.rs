use std::collections::HashSet;

use itertools::Itertools;
use log::info;
use scraper::{ElementRef, Html};

use crate::akleg::schema::{MemberName, MemberRecord};
use crate::akleg::{BASE_URL, DEFAULT_TITLE, MEMBER_STATUS, REGION};

/// Extracts one record per member block on a chamber roster page,
/// in document order.  When two blocks share a profile URL (or a name,
/// when neither links to a profile), the first one wins.
pub fn parse(html: &Html) -> Vec<MemberRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    for block in member_blocks(html) {
        let Some(record) = parse_member_block(block) else {
            continue;
        };
        if !seen.insert(record.dedupe_key().to_owned()) {
            continue;
        }
        info!("scraped: {}", record.name());
        records.push(record);
    }
    records
}

/// Every `<li>` carrying a `strong.name` is a candidate member entry.
pub fn member_blocks<'a>(html: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    html.select(selector!("li"))
        .filter(|li| li.select(selector!("strong.name")).next().is_some())
}

fn parse_member_block(li: ElementRef) -> Option<MemberRecord> {
    let name = element_text(li.select(selector!("strong.name")).next()?);
    if name.is_empty() {
        return None;
    }

    let title = li
        .select(selector!("span.position"))
        .next()
        .map(element_text)
        .filter(|position| !position.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_owned());

    let profile = profile_href(li)
        .map(|href| normalize_profile_url(BASE_URL, href))
        .unwrap_or_default();

    let details = MemberDetails::scan(li);
    let otherinfo = compose_otherinfo(
        details.city.as_deref(),
        details.district.as_deref(),
        details.phone.as_deref(),
    );

    Some(
        MemberRecord::builder()
            .name(MemberName::from(name))
            .title(title)
            .profile(profile.clone())
            .url(profile)
            .member_type(MEMBER_STATUS.to_owned())
            .country(REGION.to_owned())
            .party(details.party.unwrap_or_default())
            .otherinfo(otherinfo)
            .build(),
    )
}

/// The profile link is the anchor wrapping the member photo,
/// not whatever contact link happens to come first.
fn profile_href<'a>(li: ElementRef<'a>) -> Option<&'a str> {
    li.select(selector!("a[href]"))
        .find(|a| a.select(selector!("div.img-holder, img")).next().is_some())
        .and_then(|a| a.attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
}

/// Resolves the href shapes seen on the roster pages: absolute,
/// protocol-relative, root-relative, and bare relative paths.
pub fn normalize_profile_url(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_owned()
    } else if let Some(rest) = href.strip_prefix("//") {
        format!("https://{rest}")
    } else if href.starts_with('/') {
        format!("{base}{href}")
    } else {
        format!("{base}/{href}")
    }
}

/// Present-only fields in fixed order, joined with `" | "`.
/// District keeps its `District <value>` display form.
pub fn compose_otherinfo(
    city: Option<&str>,
    district: Option<&str>,
    phone: Option<&str>,
) -> String {
    [
        city.map(|city| format!("City: {city}")),
        district.map(|district| format!("District: District {district}")),
        phone.map(|phone| format!("Phone: {phone}")),
    ]
    .into_iter()
    .flatten()
    .join(" | ")
}

#[derive(Default)]
struct MemberDetails {
    party: Option<String>,
    city: Option<String>,
    district: Option<String>,
    phone: Option<String>,
}

impl MemberDetails {
    /// The details appear in two renderings.  List-style items
    /// (`<li>District <span>5</span></li>`) are scanned first; `<dt>`/`<dd>`
    /// pairs overwrite them when both are present.  The first labeled phone
    /// (Phone or Toll-Free) wins; a bare phone-shaped `<dd>` is the last resort.
    fn scan(li: ElementRef) -> Self {
        let mut details = Self::default();

        for item in li.select(selector!("li")) {
            let Some(span) = item.select(selector!("span")).next() else {
                continue;
            };
            let Some(label) = leading_text(item) else {
                continue;
            };
            let value = element_text(span);
            if value.is_empty() {
                continue;
            }
            match label.trim_end_matches(':').to_ascii_lowercase().as_str() {
                "district" => details.district = Some(value),
                "party" => details.party = Some(value),
                "city" => details.city = Some(value),
                _ => {}
            }
        }

        for dt in li.select(selector!("dt")) {
            let Some(dd) = dt.next_siblings().find_map(ElementRef::wrap) else {
                continue;
            };
            if dd.value().name() != "dd" {
                continue;
            }
            let value = element_text(dd);
            if value.is_empty() {
                continue;
            }
            match element_text(dt).trim_end_matches(':').to_ascii_lowercase().as_str() {
                "party" => details.party = Some(value),
                "city" => details.city = Some(value),
                "district" => details.district = Some(value),
                "phone" | "toll-free" => {
                    details.phone.get_or_insert(value);
                }
                _ => {}
            }
        }

        if details.phone.is_none() {
            details.phone = li
                .select(selector!("dd"))
                .map(element_text)
                .find(|text| regex!(r"^\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}$").is_match(text));
        }

        details
    }
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// First non-empty text node directly under the element, i.e. the label
/// preceding the `<span>` value in a list-style detail item.
fn leading_text(el: ElementRef) -> Option<String> {
    el.children().find_map(|node| {
        node.value()
            .as_text()
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty())
    })
}
