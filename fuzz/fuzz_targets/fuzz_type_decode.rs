#![no_main]

use libfuzzer_sys::fuzz_target;

use ballot_types::{ProposalName, VoterAddress};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary input must never panic.
    let _ = serde_json::from_slice::<ProposalName>(data);
    let _ = serde_json::from_slice::<VoterAddress>(data);

    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(name) = ProposalName::encode(s) {
            assert_eq!(name.as_bytes()[31], 0);
            assert_eq!(name.trimmed(), s.trim_end_matches('\0').as_bytes());
        }
        let _ = s.parse::<VoterAddress>();
    }

    if data.len() >= 32 {
        let mut slot = [0u8; 32];
        slot.copy_from_slice(&data[..32]);
        let _ = ProposalName::from_bytes(slot).decode();
    }
});
