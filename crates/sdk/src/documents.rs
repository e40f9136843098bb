//! GraphQL operation documents.
//!
//! One constant per backend operation. Variable names here are the wire
//! contract; the workflow modules must supply exactly these fields.

/// Exchange a Telegram login payload for a session JWT.
pub(crate) const LOGIN_MUTATION: &str = r#"
  mutation LoginMutation($appId: String = "", $initData: String = "") {
    tgLogin(appId: $appId, initData: $initData)
  }
"#;

/// Pre-login existence check. The user is identified by the
/// `x-hasura-tg-id` request header, not a variable.
pub(crate) const CHECK_USER_EXISTS_QUERY: &str = r#"
  query CheckUserIsExistQueryByTgId {
    telegramUser {
      walletUserId
      tgId
    }
  }
"#;

/// Wallet address of the logged-in user.
pub(crate) const USER_WALLET_ADDRESS_QUERY: &str = r#"
  query UserWalletAddressQuery($id: uuid = "") {
    walletUserByPk(id: $id) {
      sub_wallets {
        address
      }
    }
  }
"#;

/// Bind a Google keyless account to the logged-in user.
pub(crate) const BIND_GOOGLE_MUTATION: &str = r#"
  mutation BindGoogleMutation($address: String = "", $idToken: String = "") {
    bindGoogle(address: $address, idToken: $idToken)
  }
"#;

/// Create a payment order from an encoded payload.
pub(crate) const CREATE_ORDER_MUTATION: &str = r#"
  mutation CreateOrderMutation($appId: String = "", $payload: String = "") {
    createOrder(appId: $appId, payload: $payload)
  }
"#;

/// Dry-run an order payload without creating an order.
pub(crate) const SIMULATE_ORDER_QUERY: &str = r#"
  query SimulateOrderQuery($payload: String = "") {
    simulateOrder(payload: $payload)
  }
"#;

/// User-interactive commit of a previously created order.
pub(crate) const CONFIRM_ORDER_MUTATION: &str = r#"
  mutation ConfirmOrderMutation($orderId: String = "") {
    confirmOrder(orderId: $orderId)
  }
"#;

/// Paged order history for the session user, newest first.
pub(crate) const FETCH_ORDER_LIST_QUERY: &str = r#"
  query FetchOrderListQuery(
    $walletUserId: uuid = ""
    $limit: Int = 10
    $offset: Int = 0
    $status: [Int] = []
  ) {
    order(
      where: { walletUserId: { _eq: $walletUserId }, status: { _in: $status } }
      limit: $limit
      offset: $offset
      orderBy: { createdAt: DESC }
    ) {
      applicationId
      createdAt
      id
      payload
      status
      transactionSeqNo
      type
      updatedAt
      walletUserId
      transactions {
        hash
        gasFee
        createdAt
        status
        type
      }
    }
    orderAggregate(
      where: { walletUserId: { _eq: $walletUserId }, status: { _in: $status } }
    ) {
      aggregate {
        count
      }
    }
  }
"#;

/// Create a single- or multi-recipient transfer.
pub(crate) const CREATE_TRANSFER_MUTATION: &str = r#"
  mutation CreateTransferMutation(
    $amount: Float = 0
    $count: Int = 1
    $expirationAt: Float = 0
    $symbol: String = ""
    $type: Int = 0
  ) {
    createTransfer(
      amount: $amount
      count: $count
      expirationAt: $expirationAt
      symbol: $symbol
      type: $type
    )
  }
"#;

/// Full transfer record by id, with claims and the claim-count
/// aggregate. The id also travels in the `x-hasura-trans-id` header.
pub(crate) const FETCH_TRANSFER_QUERY: &str = r#"
  query FetchTransferQuery($id: uuid = "") {
    transferCreated(where: { id: { _eq: $id } }) {
      id
      walletUserId
      isRefund
      totalAmount
      totalCount
      expirationAt
      createdAt
      transfer_claimeds {
        walletUserId
        createdAt
      }
      transferClaimedsAggregate {
        aggregate {
          count
        }
      }
    }
  }
"#;

/// Redeem a claim against a transfer. The parameter is an opaque token
/// owned by the backend.
pub(crate) const CLAIM_TRANSFER_MUTATION: &str = r#"
  mutation ClaimTransferMutation($transferParam: String = "") {
    claimTransfer(transferParam: $transferParam)
  }
"#;
