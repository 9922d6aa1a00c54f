// Copyright (c) 2025 The Botho Foundation

//! Domain separation tags for hashes and transcripts.

/// Default domain the commitment generators are derived under.
pub const DEFAULT_SETUP_DOMAIN: &str = "dualdory-v1";

/// Transcript label for the ring membership proof.
pub const RING_PROOF_TRANSCRIPT_LABEL: &[u8] = b"dualdory-ring-proof";

/// Transcript label for the tag proof.
pub const TAG_PROOF_TRANSCRIPT_LABEL: &[u8] = b"dualdory-tag-proof";

/// Hash domain for the ring proof digest.
pub const RING_PROOF_DIGEST_DOMAIN_TAG: &[u8] = b"dualdory-ring-proof-digest";

/// Hash domain for the tag proof digest.
pub const TAG_PROOF_DIGEST_DOMAIN_TAG: &[u8] = b"dualdory-tag-proof-digest";
