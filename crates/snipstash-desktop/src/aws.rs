use std::collections::BTreeSet;
use std::path::Path;

use crate::config::CredentialSource;

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(aws_sdk_s3::config::Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "snipstash-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Parse AWS profile names from `~/.aws/credentials` and `~/.aws/config`.
pub fn list_aws_profiles() -> Vec<String> {
    let home = match dirs::home_dir() {
        Some(h) => h,
        None => return Vec::new(),
    };

    let aws_dir = home.join(".aws");
    let mut profiles = BTreeSet::new();

    parse_ini_sections(&aws_dir.join("credentials"), &mut profiles, false);
    // ~/.aws/config prefixes section names with "profile "
    parse_ini_sections(&aws_dir.join("config"), &mut profiles, true);

    // "default" is implicit
    profiles.remove("default");

    profiles.into_iter().collect()
}

fn parse_ini_sections(path: &Path, profiles: &mut BTreeSet<String>, strip_profile_prefix: bool) {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            let mut name = trimmed[1..trimmed.len() - 1].trim();
            if strip_profile_prefix {
                if let Some(stripped) = name.strip_prefix("profile ") {
                    name = stripped.trim();
                }
            }
            if !name.is_empty() {
                profiles.insert(name.to_string());
            }
        }
    }
}
