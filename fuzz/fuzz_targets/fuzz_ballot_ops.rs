#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use ballot_ledger::Ballot;
use ballot_types::VoterAddress;

#[derive(Arbitrary, Debug)]
enum Op {
    Grant { caller: u8, target: u8 },
    Delegate { caller: u8, to: u8 },
    Vote { caller: u8, proposal: u8 },
}

#[derive(Arbitrary, Debug)]
struct Input {
    proposals: u8,
    ops: Vec<Op>,
}

fn account(id: u8) -> VoterAddress {
    // Small pool so that chains and cycles actually form.
    VoterAddress::from_bytes([id % 8; 20])
}

// Drive the ledger with arbitrary call sequences. No call may panic, a
// rejected call must leave the ballot unchanged, and the invariants must hold
// after every step.
fuzz_target!(|input: Input| {
    let count = usize::from(input.proposals % 8) + 1;
    let names: Vec<String> = (0..count).map(|i| format!("Proposal {}", i + 1)).collect();
    let Ok(mut ballot) = Ballot::from_names(account(0), names.as_slice()) else {
        return;
    };

    for op in &input.ops {
        let before = ballot.clone();
        let result = match *op {
            Op::Grant { caller, target } => {
                ballot.give_right_to_vote(&account(caller), &account(target))
            }
            Op::Delegate { caller, to } => ballot.delegate(&account(caller), &account(to)),
            Op::Vote { caller, proposal } => ballot.vote(&account(caller), usize::from(proposal)),
        };
        if result.is_err() {
            assert_eq!(ballot, before);
        }
        assert!(ballot.is_consistent());
        assert!(ballot.winning_proposal() < count);
    }
});
