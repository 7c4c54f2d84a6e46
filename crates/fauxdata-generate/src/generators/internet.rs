use std::sync::OnceLock;

use regex::RegexSet;
use tracing::debug;
use url::Host;

use fauxdata_core::{Error, RandomSource, Result};

use crate::faker::Faker;

const AVATAR_BASE_URL: &str = "https://s3.amazonaws.com/uifaces/faces/twitter/";
const IMAGE_BASE_URL: &str = "http://lorempixel.com/";
const SPECIAL_CHARACTERS: &[u8] = b"!@#$%^&*";
const HEX_DIGITS: &[u8] = b"0123456789abcdef";
const MAC_GROUPS: usize = 6;
const IPV6_GROUPS: usize = 8;

pub const DEFAULT_PASSWORD_MIN: usize = 8;
pub const DEFAULT_PASSWORD_MAX: usize = 16;

const PRIVATE_IPV4_NETS: [&str; 5] = [
    r"^10\..+",
    r"^127\..+",
    r"^169\.254\..+",
    r"^172\.(16|17|18|19|2\d|30|31)\..+",
    r"^192\.168\..+",
];

/// Emails, domains, URLs, passwords and network addresses.
pub struct Internet<'a, R: RandomSource> {
    faker: &'a mut Faker<R>,
}

impl<'a, R: RandomSource> Internet<'a, R> {
    pub(crate) fn new(faker: &'a mut Faker<R>) -> Self {
        Self { faker }
    }

    /// `firstname.lastname@<free email domain>`.
    pub fn email_address(&mut self) -> Result<String> {
        let local_part = self.name_local_part()?;
        self.email_address_with(&local_part)
    }

    pub fn email_address_with(&mut self, local_part: &str) -> Result<String> {
        let domain = self.faker.resolve("internet.free_email")?;
        Ok(format!("{local_part}@{}", to_ascii_domain(&domain)?))
    }

    /// Like `email_address` but on a reserved example domain.
    pub fn safe_email_address(&mut self) -> Result<String> {
        let local_part = self.name_local_part()?;
        self.safe_email_address_with(&local_part)
    }

    /// Domain comes from `internet.safe_email`, a key separate from the
    /// free-mail providers in `internet.free_email`.
    pub fn safe_email_address_with(&mut self, local_part: &str) -> Result<String> {
        let domain = self.faker.resolve("internet.safe_email")?;
        Ok(format!("{local_part}@{}", to_ascii_domain(&domain)?))
    }

    pub fn domain_name(&mut self) -> Result<String> {
        let word = self.domain_word()?;
        let suffix = self.domain_suffix()?;
        Ok(format!("{word}.{suffix}"))
    }

    /// Last name reduced to a single ASCII domain label.
    pub fn domain_word(&mut self) -> Result<String> {
        let last_name = self.faker.name().last_name()?;
        to_ascii_domain(&simplify(&last_name))
    }

    pub fn domain_suffix(&mut self) -> Result<String> {
        self.faker.resolve("internet.domain_suffix")
    }

    /// `www.<firstname>-<domain word>.<suffix>`.
    pub fn url(&mut self) -> Result<String> {
        let first_name = self.faker.name().first_name()?;
        let word = self.domain_word()?;
        let host = to_ascii_domain(&format!("{}-{word}", simplify(&first_name)))?;
        let suffix = self.domain_suffix()?;
        Ok(format!("www.{host}.{suffix}"))
    }

    pub fn avatar(&mut self) -> Result<String> {
        let path = self.faker.resolve("internet.avatar")?;
        Ok(format!("{AVATAR_BASE_URL}{path}"))
    }

    /// Placeholder image with locale-provided dimensions and a random tint.
    pub fn image(&mut self) -> Result<String> {
        let dimension = self.faker.resolve("internet.image_dimension")?;
        let (width, height) = parse_dimension(&dimension)?;
        let gray = self.faker.next_bool();
        self.image_with(width, height, gray, None)
    }

    /// `text` is appended only when present and non-empty.
    pub fn image_with(
        &mut self,
        width: u32,
        height: u32,
        gray: bool,
        text: Option<&str>,
    ) -> Result<String> {
        let category = self.faker.resolve("internet.image_category")?;
        Ok(format!(
            "{IMAGE_BASE_URL}{}{width}/{height}/{category}/{}",
            if gray { "g/" } else { "" },
            text.unwrap_or_default()
        ))
    }

    pub fn password(&mut self) -> Result<String> {
        self.password_with(DEFAULT_PASSWORD_MIN, DEFAULT_PASSWORD_MAX, false, false)
    }

    /// Password with a length in `[min, max)`.
    ///
    /// With `include_special`, between 1 and `min` positions are overwritten
    /// by characters from `!@#$%^&*`.
    pub fn password_with(
        &mut self,
        min: usize,
        max: usize,
        include_uppercase: bool,
        include_special: bool,
    ) -> Result<String> {
        if include_special && min == 0 {
            return Err(Error::InvalidArgument(
                "special characters need a minimum length of at least 1".to_string(),
            ));
        }

        let base = self
            .faker
            .lorem()
            .characters_between(min, max, include_uppercase)?;
        if !include_special {
            return Ok(base);
        }

        let mut password: Vec<char> = base.chars().collect();
        let injections = self.faker.next_int(min)? + 1;
        for _ in 0..injections {
            let position = self.faker.next_int(password.len())?;
            let special = SPECIAL_CHARACTERS[self.faker.next_int(SPECIAL_CHARACTERS.len())?];
            password[position] = special as char;
        }
        Ok(password.into_iter().collect())
    }

    /// Six colon-separated hex pairs, keeping any groups given in `prefix`.
    pub fn mac_address(&mut self, prefix: Option<&str>) -> Result<String> {
        let prefix = prefix.unwrap_or_default().trim().trim_end_matches(':');
        let groups: Vec<&str> = if prefix.is_empty() {
            Vec::new()
        } else {
            prefix.split(':').collect()
        };

        if groups.len() >= MAC_GROUPS {
            return Err(Error::InvalidArgument(format!(
                "mac prefix '{prefix}' has {} groups, at most {} allowed",
                groups.len(),
                MAC_GROUPS - 1
            )));
        }
        if let Some(bad) = groups
            .iter()
            .find(|group| group.len() != 2 || !group.chars().all(|c| c.is_ascii_hexdigit()))
        {
            return Err(Error::InvalidArgument(format!(
                "mac prefix group '{bad}' is not two hex digits"
            )));
        }

        let mut out = groups.join(":");
        for _ in groups.len()..MAC_GROUPS {
            if !out.is_empty() {
                out.push(':');
            }
            out.push_str(&self.hex(2)?);
        }
        Ok(out)
    }

    /// Four dot-separated octets, each in `[2, 255]`.
    pub fn ipv4_address(&mut self) -> Result<String> {
        let mut octets = [0_usize; 4];
        for octet in &mut octets {
            *octet = self.faker.next_int(254)? + 2;
        }
        Ok(format!(
            "{}.{}.{}.{}",
            octets[0], octets[1], octets[2], octets[3]
        ))
    }

    pub fn private_ipv4_address(&mut self) -> Result<String> {
        self.sample_ipv4(true)
    }

    pub fn public_ipv4_address(&mut self) -> Result<String> {
        self.sample_ipv4(false)
    }

    /// IPv4 address with a prefix length in `[1, 31]`.
    pub fn ipv4_cidr(&mut self) -> Result<String> {
        let address = self.ipv4_address()?;
        let prefix = self.faker.next_int(31)? + 1;
        Ok(format!("{address}/{prefix}"))
    }

    /// Eight colon-separated groups of four hex digits.
    pub fn ipv6_address(&mut self) -> Result<String> {
        let mut groups = Vec::with_capacity(IPV6_GROUPS);
        for _ in 0..IPV6_GROUPS {
            groups.push(self.hex(4)?);
        }
        Ok(groups.join(":"))
    }

    /// IPv6 address with a prefix length in `[1, 127]`.
    pub fn ipv6_cidr(&mut self) -> Result<String> {
        let address = self.ipv6_address()?;
        let prefix = self.faker.next_int(127)? + 1;
        Ok(format!("{address}/{prefix}"))
    }

    pub fn is_private(&self, address: &str) -> bool {
        is_private(address)
    }

    fn name_local_part(&mut self) -> Result<String> {
        let first_name = self.faker.name().first_name()?;
        let last_name = self.faker.name().last_name()?;
        Ok(format!("{}.{}", simplify(&first_name), simplify(&last_name)))
    }

    fn hex(&mut self, digits: usize) -> Result<String> {
        let mut out = String::with_capacity(digits);
        for _ in 0..digits {
            out.push(HEX_DIGITS[self.faker.next_int(HEX_DIGITS.len())?] as char);
        }
        Ok(out)
    }

    fn sample_ipv4(&mut self, private: bool) -> Result<String> {
        let attempts = self.faker.max_sampling_attempts();
        for attempt in 1..=attempts {
            let address = self.ipv4_address()?;
            if is_private(&address) == private {
                debug!(private, attempt, %address, "sampled ipv4 address");
                return Ok(address);
            }
        }
        Err(Error::SamplingExhausted { attempts })
    }
}

/// True when `address` is in 10/8, 127/8, 169.254/16, 172.16/12 or 192.168/16.
pub fn is_private(address: &str) -> bool {
    private_nets().is_match(address)
}

fn private_nets() -> &'static RegexSet {
    static NETS: OnceLock<RegexSet> = OnceLock::new();
    NETS.get_or_init(|| {
        RegexSet::new(PRIVATE_IPV4_NETS).expect("private network patterns are valid regexes")
    })
}

/// Lowercase and drop apostrophes and whitespace.
fn simplify(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// IDNA conversion of a domain (or single label) to its ASCII form.
///
/// Goes through the WHATWG host parser, so ASCII labels come back lowercased
/// (`Example.COM` → `example.com`) and percent-escapes are decoded. IP
/// literals are returned unchanged.
fn to_ascii_domain(input: &str) -> Result<String> {
    match Host::parse(input) {
        Ok(Host::Domain(domain)) => Ok(domain),
        Ok(_) => Ok(input.to_string()),
        Err(err) => Err(Error::DomainEncoding {
            input: input.to_string(),
            message: err.to_string(),
        }),
    }
}

fn parse_dimension(value: &str) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidLocaleData(format!("image dimension '{value}' is not WxH"));
    let (width, height) = value.split_once('x').ok_or_else(invalid)?;
    let width = width.trim().parse().map_err(|_| invalid())?;
    let height = height.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}
