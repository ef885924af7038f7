//! Nullable accounts: a deterministic, ordered list of voter identities.

use ballot_types::VoterAddress;

/// The well-known development accounts, in signer order.
const WELL_KNOWN: [&str; 10] = [
    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
    "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
    "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC",
    "0x90F79bf6EB2c4f870365E785982E1f101E93b906",
    "0x15d34AAf54267DB7D7c367839AAf71A00a2C6A65",
    "0x9965507D1a55bcC2695C58ba16FB37d819B0A4dc",
    "0x976EA74026E726554dB657fA54763abd0C3a0aa9",
    "0x14dC79964da2C08b23698B3D3cc7Ca32193d9955",
    "0x23618e81E3f5cdF7f54C3d65f7FBc0aBf5B21E8f",
    "0xa0Ee7A142d267C1f36714E4a8F75612F20a79720",
];

/// An ordered set of test accounts.
///
/// Index 0 is the deployer. The first ten indices are the well-known
/// development accounts; later indices are synthesized from the index.
pub struct NullAccounts {
    accounts: Vec<VoterAddress>,
}

impl NullAccounts {
    /// Create `count` accounts.
    pub fn new(count: usize) -> Self {
        Self {
            accounts: (0..count).map(Self::account).collect(),
        }
    }

    /// The account at `index`, independent of any list.
    pub fn account(index: usize) -> VoterAddress {
        match WELL_KNOWN.get(index) {
            Some(raw) => VoterAddress::new(*raw),
            None => {
                let mut bytes = [0u8; 20];
                bytes[12..].copy_from_slice(&(index as u64).to_be_bytes());
                VoterAddress::from_bytes(bytes)
            }
        }
    }

    /// The deployer, which becomes the chairperson.
    pub fn deployer(&self) -> &VoterAddress {
        &self.accounts[0]
    }

    /// Get the account at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &VoterAddress {
        &self.accounts[index]
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VoterAddress> {
        self.accounts.iter()
    }
}

impl Default for NullAccounts {
    fn default() -> Self {
        Self::new(WELL_KNOWN.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accounts_are_valid_and_distinct() {
        let accounts = NullAccounts::new(25);
        assert_eq!(accounts.len(), 25);
        assert!(accounts.iter().all(VoterAddress::is_valid));
        let unique: HashSet<_> = accounts.iter().collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn deployer_is_first_well_known_account() {
        let accounts = NullAccounts::default();
        let expected: VoterAddress = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        assert_eq!(accounts.deployer(), &expected);
    }

    #[test]
    fn account_is_stable_across_lists() {
        assert_eq!(NullAccounts::new(3).get(2), &NullAccounts::account(2));
        assert_eq!(NullAccounts::new(15).get(12), &NullAccounts::account(12));
    }
}
