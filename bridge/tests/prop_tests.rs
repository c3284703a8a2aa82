use proptest::prelude::*;

use weft_bridge::{BridgeDelivery, BridgeEngine, BridgeError, BridgeRequest};
use weft_ledger::{FungibleLedger, InMemoryLedger};
use weft_nullables::NullGateway;
use weft_types::{
    BridgeParams, ChainId, Timestamp, TokenAmount, TokenIdentity, TxId, WalletAddress,
};

fn addr(s: &str) -> WalletAddress {
    WalletAddress::new(format!("weft_{s}"))
}

fn engine(chain: u64) -> BridgeEngine<NullGateway> {
    let mut gateway = NullGateway::new(addr("gw"));
    gateway.enable_chain(ChainId::new(1));
    gateway.enable_chain(ChainId::new(2));
    BridgeEngine::new(
        TokenIdentity::default(),
        addr("token"),
        ChainId::new(chain),
        addr("gw"),
        gateway,
        BridgeParams::default(),
    )
}

proptest! {
    /// Conservation: with every message delivered exactly once, tokens
    /// burned on the source chain equal tokens minted on the destination,
    /// and the cross-chain supply never changes.
    #[test]
    fn bridged_value_is_conserved(amounts in prop::collection::vec(1u128..10_000, 0..20)) {
        let initial: u128 = 1_000_000;
        let mut source = engine(1);
        let mut destination = engine(2);
        let mut source_ledger =
            InMemoryLedger::with_balances([(addr("holder"), TokenAmount::new(initial))]);
        let mut destination_ledger = InMemoryLedger::new();
        let mut fees = InMemoryLedger::new();

        let mut tx_id = 0u128;
        for amount in amounts {
            source_ledger.approve(&addr("holder"), &addr("token"), TokenAmount::new(amount));
            let request = BridgeRequest::new(
                ChainId::new(2),
                addr("recipient"),
                TokenAmount::new(amount),
            );
            if source
                .request_bridge(&mut source_ledger, &addr("holder"), request, Timestamp::new(tx_id as u64))
                .is_err()
            {
                continue;
            }
            tx_id += 1;
            destination
                .process_bridge(
                    &mut destination_ledger,
                    &mut fees,
                    &addr("gw"),
                    BridgeDelivery::new(
                        TxId::new(tx_id),
                        ChainId::new(1),
                        addr("recipient"),
                        TokenAmount::new(amount),
                        TokenAmount::ZERO,
                    ),
                    Timestamp::new(tx_id as u64),
                )
                .unwrap();

            let total = source_ledger.total_supply().raw()
                + destination_ledger.total_supply().raw();
            prop_assert_eq!(total, initial);
        }

        prop_assert_eq!(
            destination_ledger.balance_of(&addr("recipient")).raw(),
            initial - source_ledger.total_supply().raw()
        );
    }

    /// Atomicity: if the gateway rejects the outbound request, the holder's
    /// balance and allowance are untouched.
    #[test]
    fn failed_request_leaves_no_trace(
        balance in 1u128..100_000,
        amount in 1u128..100_000,
    ) {
        let mut source = engine(1);
        source.gateway_mut().fail_next_request("injected");
        let mut ledger =
            InMemoryLedger::with_balances([(addr("holder"), TokenAmount::new(balance))]);
        ledger.approve(&addr("holder"), &addr("token"), TokenAmount::new(amount));

        let request = BridgeRequest::new(
            ChainId::new(2),
            addr("recipient"),
            TokenAmount::new(amount),
        );
        let result =
            source.request_bridge(&mut ledger, &addr("holder"), request, Timestamp::new(1));

        prop_assert!(result.is_err());
        prop_assert_eq!(ledger.balance_of(&addr("holder")), TokenAmount::new(balance));
        prop_assert_eq!(
            ledger.allowance(&addr("holder"), &addr("token")),
            TokenAmount::new(amount)
        );
        prop_assert_eq!(ledger.total_supply(), TokenAmount::new(balance));
    }

    /// A disabled destination never burns, whatever the amounts involved.
    #[test]
    fn disabled_destination_never_burns(
        balance in 1u128..100_000,
        amount in 1u128..100_000,
        chain in 3u64..1_000,
    ) {
        let mut source = engine(1);
        let mut ledger =
            InMemoryLedger::with_balances([(addr("holder"), TokenAmount::new(balance))]);
        ledger.approve(&addr("holder"), &addr("token"), TokenAmount::new(amount));

        let request = BridgeRequest::new(
            ChainId::new(chain),
            addr("recipient"),
            TokenAmount::new(amount),
        );
        let result =
            source.request_bridge(&mut ledger, &addr("holder"), request, Timestamp::new(1));

        prop_assert_eq!(result.unwrap_err(), BridgeError::DestinationNotEnabled(ChainId::new(chain)));
        prop_assert_eq!(ledger.total_supply(), TokenAmount::new(balance));
    }

    /// Replaying any processed delivery never double-mints.
    #[test]
    fn duplicate_deliveries_never_double_mint(
        amount in 1u128..100_000,
        replays in 1usize..5,
    ) {
        let mut destination = engine(2);
        let mut ledger = InMemoryLedger::new();
        let mut fees = InMemoryLedger::new();
        let delivery = BridgeDelivery::new(
            TxId::new(7),
            ChainId::new(1),
            addr("recipient"),
            TokenAmount::new(amount),
            TokenAmount::ZERO,
        );

        destination
            .process_bridge(&mut ledger, &mut fees, &addr("gw"), delivery.clone(), Timestamp::new(1))
            .unwrap();
        for i in 0..replays {
            let result = destination.process_bridge(
                &mut ledger,
                &mut fees,
                &addr("gw"),
                delivery.clone(),
                Timestamp::new(2 + i as u64),
            );
            prop_assert_eq!(result.unwrap_err(), BridgeError::DuplicateDelivery(TxId::new(7)));
        }
        prop_assert_eq!(ledger.balance_of(&addr("recipient")), TokenAmount::new(amount));
    }

    /// Whenever a delivery charges a fee, the approval granted to the
    /// gateway is exactly that fee, never more.
    #[test]
    fn fee_approval_is_exact(
        funding in 0u128..10_000,
        fee in 1u128..10_000,
    ) {
        let mut destination = engine(2);
        let mut ledger = InMemoryLedger::new();
        let mut fees =
            InMemoryLedger::with_balances([(addr("token"), TokenAmount::new(funding))]);

        let result = destination.process_bridge(
            &mut ledger,
            &mut fees,
            &addr("gw"),
            BridgeDelivery::new(
                TxId::new(1),
                ChainId::new(1),
                addr("recipient"),
                TokenAmount::new(100),
                TokenAmount::new(fee),
            ),
            Timestamp::new(1),
        );

        if funding >= fee {
            prop_assert!(result.is_ok());
            prop_assert_eq!(
                fees.allowance(&addr("token"), &addr("gw")),
                TokenAmount::new(fee)
            );
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(fees.allowance(&addr("token"), &addr("gw")), TokenAmount::ZERO);
            prop_assert_eq!(ledger.total_supply(), TokenAmount::ZERO);
        }
    }
}
